//! Error types for matrix construction, file I/O and multiplication

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, loading, saving or multiplying matrices.
#[derive(Debug, Error)]
pub enum SmatrixError {
    /// The file could not be opened, read or written.
    #[error("cannot open file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not in the expected text layout.
    #[error("file '{}' is malformed: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A stored column lies outside `[1, cols]`.
    #[error(
        "file '{}' contains illegal matrix data: column {column} in row {row} (cols = {cols})",
        .path.display()
    )]
    IllegalColumn {
        path: PathBuf,
        row: usize,
        column: i64,
        cols: usize,
    },

    /// A matrix needs at least one row and one column.
    #[error("invalid matrix dimensions ({rows}, {cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    /// `A.cols != B.rows`.
    #[error("product undefined between ({a_rows}, {a_cols}) and ({b_rows}, {b_cols})")]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
}

impl SmatrixError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SmatrixError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, SmatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_shapes() {
        let err = SmatrixError::DimensionMismatch {
            a_rows: 2,
            a_cols: 3,
            b_rows: 2,
            b_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "product undefined between (2, 3) and (2, 2)"
        );
    }

    #[test]
    fn test_illegal_column_message_names_file() {
        let err = SmatrixError::IllegalColumn {
            path: PathBuf::from("a.txt"),
            row: 1,
            column: 5,
            cols: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("'a.txt'"));
        assert!(msg.contains("illegal matrix data"));
    }
}
