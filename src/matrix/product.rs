//! Sparse matrix multiplication over row lists
//!
//! For every row `i` of A and every column `j` of B the product walks the
//! stored elements `(k, a_ik)` of A's row and looks up `b_kj` by scanning
//! row `k` of B. The cost is O(A.rows × B.cols × nnz-per-row-of-A), each
//! lookup into B being linear in the length of the scanned row.

use log::{trace, warn};
use num_traits::Zero;

use crate::error::{Result, SmatrixError};
use crate::matrix::SparseMatrix;

/// Computes `C = A × B`.
///
/// Entries whose accumulated sum is exactly `0.0` are not stored, so the
/// result only holds structural nonzeros.
///
/// # Errors
///
/// Returns [`SmatrixError::DimensionMismatch`] if `a.n_cols() != b.n_rows()`.
/// No partial result is produced in that case.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.n_cols() != b.n_rows() {
        let err = SmatrixError::DimensionMismatch {
            a_rows: a.n_rows(),
            a_cols: a.n_cols(),
            b_rows: b.n_rows(),
            b_cols: b.n_cols(),
        };
        warn!("{}", err);
        return Err(err);
    }

    let mut c = SparseMatrix::new(a.n_rows(), b.n_cols())?;

    for i in 0..a.n_rows() {
        for j in 0..b.n_cols() {
            let mut sum: f64 = 0.0;
            for (k, a_ik) in a.row_iter(i) {
                let b_kj = b.access(k, j);
                if !b_kj.is_zero() {
                    sum += a_ik * b_kj;
                }
            }

            if !sum.is_zero() {
                c.insert(i, j, sum);
            }
        }
        trace!("product row {}: {} nonzeros", i, c.row_len(i));
    }

    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(matrix: &SparseMatrix) -> Vec<Vec<f64>> {
        (0..matrix.n_rows())
            .map(|i| (0..matrix.n_cols()).map(|j| matrix.access(i, j)).collect())
            .collect()
    }

    #[test]
    fn test_multiplication() {
        // A = [1 2; 0 3]
        // B = [4 5; 6 7]
        // C = A*B = [16 19; 18 21]
        let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0)])
            .unwrap();
        let b = SparseMatrix::from_triplets(
            2,
            2,
            vec![(0, 0, 4.0), (0, 1, 5.0), (1, 0, 6.0), (1, 1, 7.0)],
        )
        .unwrap();

        let c = multiply(&a, &b).unwrap();

        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.nnz(), 4);
        assert_eq!(dense(&c), vec![vec![16.0, 19.0], vec![18.0, 21.0]]);
    }

    #[test]
    fn test_rectangular_shape() {
        // (2×3) × (3×4) -> 2×4
        let a = SparseMatrix::from_triplets(2, 3, vec![(0, 2, 1.0), (1, 0, 2.0)]).unwrap();
        let b = SparseMatrix::from_triplets(3, 4, vec![(2, 3, 5.0), (0, 1, 3.0)]).unwrap();

        let c = multiply(&a, &b).unwrap();

        assert_eq!(c.shape(), (2, 4));
        assert_eq!(c.access(0, 3), 5.0);
        assert_eq!(c.access(1, 1), 6.0);
        assert_eq!(c.nnz(), 2);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3).unwrap();
        let b = SparseMatrix::new(2, 2).unwrap();

        match multiply(&a, &b) {
            Err(SmatrixError::DimensionMismatch {
                a_rows,
                a_cols,
                b_rows,
                b_cols,
            }) => assert_eq!((a_rows, a_cols, b_rows, b_cols), (2, 3, 2, 2)),
            other => panic!("expected dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_cancelling_sum_is_not_stored() {
        // row 0 of A is [1 1], column 0 of B is [1 -1]^T -> exact zero
        let a = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 1.0), (0, 1, 1.0)]).unwrap();
        let b = SparseMatrix::from_triplets(
            2,
            2,
            vec![(0, 0, 1.0), (1, 0, -1.0), (0, 1, 2.0), (1, 1, 3.0)],
        )
        .unwrap();

        let c = multiply(&a, &b).unwrap();

        assert_eq!(c.access(0, 0), 0.0);
        assert_eq!(c.access(0, 1), 5.0);
        assert_eq!(c.row_len(0), 1);
    }
}
