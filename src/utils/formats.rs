//! Conversions between row-list matrices and external matrix libraries

use ndarray::Array2;
use sprs::CsMat;

use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::utils::exclusive_scan;

/// Stored `(col, value)` pairs of row `i`, keeping only the first entry
/// per column (the one `access` would return)
fn distinct_row(matrix: &SparseMatrix, i: usize) -> Vec<(usize, f64)> {
    let mut row: Vec<(usize, f64)> = Vec::with_capacity(matrix.row_len(i));
    for (col, value) in matrix.row_iter(i) {
        if row.last().map_or(true, |&(last, _)| last != col) {
            row.push((col, value));
        }
    }
    row
}

/// Converts to an `sprs` CSR matrix
pub fn to_sprs_csr(matrix: &SparseMatrix) -> CsMat<f64> {
    let rows: Vec<Vec<(usize, f64)>> = (0..matrix.n_rows())
        .map(|i| distinct_row(matrix, i))
        .collect();

    let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
    let indptr = exclusive_scan(&lengths);
    let (indices, data): (Vec<usize>, Vec<f64>) = rows.into_iter().flatten().unzip();

    CsMat::new(matrix.shape(), indptr, indices, data)
}

/// Converts an `sprs` matrix (CSR or CSC) into a row-list matrix
pub fn from_sprs_csr(matrix: CsMat<f64>) -> Result<SparseMatrix> {
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let mut result = SparseMatrix::new(n_rows, n_cols)?;
    for (i, row) in matrix.outer_iterator().enumerate() {
        for (j, &v) in row.iter() {
            result.insert(i, j, v);
        }
    }
    Ok(result)
}

/// Expands into a dense `ndarray` matrix
pub fn to_dense(matrix: &SparseMatrix) -> Array2<f64> {
    let mut dense = Array2::zeros(matrix.shape());
    for i in 0..matrix.n_rows() {
        for (j, v) in distinct_row(matrix, i) {
            dense[[i, j]] = v;
        }
    }
    dense
}

/// Builds a row-list matrix from the nonzero entries of a dense matrix
pub fn from_dense(dense: &Array2<f64>) -> Result<SparseMatrix> {
    let (n_rows, n_cols) = dense.dim();
    let mut matrix = SparseMatrix::new(n_rows, n_cols)?;
    for ((i, j), &v) in dense.indexed_iter() {
        if v != 0.0 {
            matrix.insert(i, j, v);
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn test_matrix() -> SparseMatrix {
        //    [1 2 0]
        //    [0 3 0]
        //    [4 0 5]
        SparseMatrix::from_triplets(
            3,
            3,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0), (2, 0, 4.0), (2, 2, 5.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_sprs_roundtrip() {
        let original = test_matrix();

        let sprs_mat = to_sprs_csr(&original);
        assert_eq!(sprs_mat.indptr().as_slice().unwrap(), &[0, 2, 3, 5]);
        assert_eq!(sprs_mat.indices(), &[0, 1, 1, 0, 2]);

        let roundtrip = from_sprs_csr(sprs_mat).unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_sprs_csc() {
        let original = test_matrix();
        let csc = to_sprs_csr(&original).to_csc();

        let roundtrip = from_sprs_csr(csc).unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_duplicates_collapse_to_first() {
        let mut m = SparseMatrix::new(1, 2).unwrap();
        m.insert(0, 1, 1.0);
        m.insert(0, 1, 9.0);

        let sprs_mat = to_sprs_csr(&m);
        assert_eq!(sprs_mat.nnz(), 1);
        assert_eq!(sprs_mat.get(0, 1), Some(&9.0));
        assert_eq!(to_dense(&m)[[0, 1]], 9.0);
    }

    #[test]
    fn test_dense_roundtrip() {
        let dense = array![[1.0, 2.0, 0.0], [0.0, 3.0, 0.0], [4.0, 0.0, 5.0]];

        let m = from_dense(&dense).unwrap();
        assert_eq!(m, test_matrix());
        assert_eq!(to_dense(&m), dense);
    }
}
