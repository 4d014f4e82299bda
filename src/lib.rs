//! # smatrix: row-list sparse matrices
//!
//! A sparse matrix stored as one sorted list of `(column, value)` pairs per
//! row, with a plain-text file format and sparse matrix multiplication.
//!
//! ## Overview
//!
//! - **Row lists**: each row keeps only its nonzero elements, sorted by column.
//! - **Matrix**: a fixed `rows × cols` shape owning one row list per row.
//! - **Multiplication**: `C = A × B` by walking A's row lists and looking up
//!   matching entries in B's rows; sums that are exactly zero are not stored.
//! - **Text format**: `rows cols` header followed by `col value ... -1` per row,
//!   with 1-based columns on disk.
//!
//! ## Usage
//!
//! ```
//! use smatrix::{multiply, SparseMatrix};
//!
//! let mut a = SparseMatrix::new(2, 2)?;
//! a.insert(0, 0, 1.0);
//! a.insert(0, 1, 2.0);
//! a.insert(1, 0, 3.0);
//! a.insert(1, 1, 4.0);
//!
//! let b = SparseMatrix::identity(2)?;
//! let c = multiply(&a, &b)?;
//!
//! assert_eq!(c.access(1, 0), 3.0);
//! # Ok::<(), smatrix::SmatrixError>(())
//! ```
//!
//! Files are read and written with [`read_matrix`] and [`write_matrix`]:
//!
//! ```no_run
//! use smatrix::{multiply, read_matrix, write_matrix, FormatConfig};
//!
//! let a = read_matrix("a.txt")?;
//! let b = read_matrix("b.txt")?;
//! let c = multiply(&a, &b)?;
//! write_matrix("c.txt", &c, &FormatConfig::default())?;
//! # Ok::<(), smatrix::SmatrixError>(())
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{Result, SmatrixError};
pub use io::{format_matrix, parse_matrix, read_matrix, render, write_matrix};
pub use matrix::{multiply, Element, FormatConfig, RowList, SparseMatrix};
pub use utils::{from_dense, from_sprs_csr, to_dense, to_sprs_csr};

/// Version information for the smatrix library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
