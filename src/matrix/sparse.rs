//! Row-list sparse matrix

use std::fmt;

use log::debug;

use crate::error::{Result, SmatrixError};
use crate::matrix::row::{Element, RowList};

/// A sparse matrix stored as one sorted row list per row
///
/// The shape is fixed at construction. The matrix only grows through
/// [`SparseMatrix::insert`] and [`SparseMatrix::set`]; there is no removal.
/// Dropping the matrix releases every row and element exactly once.
#[derive(Clone, PartialEq)]
pub struct SparseMatrix {
    n_rows: usize,
    n_cols: usize,
    rows: Vec<RowList>,
}

impl SparseMatrix {
    /// Creates an all-zero matrix with `n_rows` empty rows
    ///
    /// # Errors
    ///
    /// Returns [`SmatrixError::InvalidDimensions`] if either dimension is zero.
    pub fn new(n_rows: usize, n_cols: usize) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(SmatrixError::InvalidDimensions {
                rows: n_rows,
                cols: n_cols,
            });
        }

        debug!("allocating {} x {} sparse matrix", n_rows, n_cols);
        Ok(Self {
            n_rows,
            n_cols,
            rows: vec![RowList::new(); n_rows],
        })
    }

    /// Creates an `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.insert(i, i, 1.0);
        }
        Ok(matrix)
    }

    /// Builds a matrix by inserting `(row, col, value)` triplets in order
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut matrix = Self::new(n_rows, n_cols)?;
        for (i, j, v) in triplets {
            matrix.insert(i, j, v);
        }
        Ok(matrix)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Total number of stored elements
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(RowList::len).sum()
    }

    /// Number of stored elements in row `i`
    pub fn row_len(&self, i: usize) -> usize {
        self.rows[i].len()
    }

    /// The row list of row `i`
    pub fn row(&self, i: usize) -> &RowList {
        &self.rows[i]
    }

    /// Iterates the stored `(col, value)` pairs of row `i` in column order
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.rows[i].iter().map(|e| (e.col, e.value))
    }

    /// Iterates every stored `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&Element { col, value }| (i, col, value)))
    }

    /// Adds `value` at `(row, col)`.
    ///
    /// Indices are not range-checked against the column count; a row index
    /// past the end panics. Inserting at a column that is already stored
    /// keeps the old element and places the new one in front of it, so the
    /// row grows by exactly one on every call. Use [`SparseMatrix::set`] to
    /// overwrite instead.
    pub fn insert(&mut self, row: usize, col: usize, value: f64) {
        self.rows[row].insert(col, value);
    }

    /// Stores `value` at `(row, col)`, replacing any value already there.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Option<f64> {
        self.rows[row].set(col, value)
    }

    /// Value at `(row, col)`, `0.0` when nothing is stored there
    pub fn access(&self, row: usize, col: usize) -> f64 {
        self.rows[row].get(col)
    }

    /// True if any row holds two elements for the same column
    pub fn has_duplicates(&self) -> bool {
        self.rows.iter().any(RowList::has_duplicates)
    }
}

impl fmt::Debug for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_rows_to_print = 5.min(self.n_rows);
        writeln!(f, "  content sample:")?;

        for (i, row) in self.rows.iter().take(max_rows_to_print).enumerate() {
            write!(f, "    row {}: ", i)?;
            if row.is_empty() {
                writeln!(f, "(empty)")?;
                continue;
            }

            let max_elements = 5.min(row.len());
            for e in row.iter().take(max_elements) {
                write!(f, "({}, {:?}) ", e.col, e.value)?;
            }
            if row.len() > max_elements {
                write!(f, "... ({} more)", row.len() - max_elements)?;
            }
            writeln!(f)?;
        }

        if self.n_rows > max_rows_to_print {
            writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}
