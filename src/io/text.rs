//! Plain-text matrix files
//!
//! The layout is whitespace separated:
//!
//! ```text
//! rows cols
//! col value col value ... -1      (row 0)
//! ...                             (one list per row)
//! ```
//!
//! Columns are 1-based on disk and 0-based in memory. Each row's list ends
//! with the sentinel `-1`. Line breaks carry no meaning to the reader.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::SplitWhitespace;

use log::debug;

use crate::error::{Result, SmatrixError};
use crate::matrix::{FormatConfig, SparseMatrix};

/// Marks the end of a row's element list
pub const ROW_SENTINEL: i64 = -1;

/// Whitespace token stream over the file contents, tagged with the source path
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    path: &'a Path,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str, path: &'a Path) -> Self {
        Self {
            inner: text.split_whitespace(),
            path,
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.inner.next().ok_or_else(|| {
            SmatrixError::parse(self.path, format!("unexpected end of file, expected {}", what))
        })
    }

    fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self.next_token(what)?;
        token
            .parse()
            .map_err(|_| SmatrixError::parse(self.path, format!("invalid {} '{}'", what, token)))
    }

    fn next_value(&mut self) -> Result<f64> {
        let token = self.next_token("value")?;
        token
            .parse()
            .map_err(|_| SmatrixError::parse(self.path, format!("invalid value '{}'", token)))
    }

    fn next_dimension(&mut self, what: &str) -> Result<usize> {
        let n = self.next_int(what)?;
        usize::try_from(n)
            .map_err(|_| SmatrixError::parse(self.path, format!("negative {} {}", what, n)))
    }
}

/// Parses a matrix from file contents. `path` is only used in error messages.
///
/// # Errors
///
/// * [`SmatrixError::IllegalColumn`] if a stored column is outside `[1, cols]`
/// * [`SmatrixError::Parse`] for malformed or truncated input
/// * [`SmatrixError::InvalidDimensions`] for a zero-sized header
pub fn parse_matrix(text: &str, path: &Path) -> Result<SparseMatrix> {
    let mut tokens = Tokens::new(text, path);

    let n_rows = tokens.next_dimension("row count")?;
    let n_cols = tokens.next_dimension("column count")?;
    let mut matrix = SparseMatrix::new(n_rows, n_cols)?;

    for i in 0..n_rows {
        loop {
            let column = tokens.next_int("column index")?;
            if column == ROW_SENTINEL {
                break;
            }
            if column < 1 || column > n_cols as i64 {
                return Err(SmatrixError::IllegalColumn {
                    path: path.to_path_buf(),
                    row: i,
                    column,
                    cols: n_cols,
                });
            }
            let value = tokens.next_value()?;
            matrix.insert(i, (column - 1) as usize, value);
        }
    }

    Ok(matrix)
}

/// Reads a matrix file.
///
/// # Errors
///
/// Returns [`SmatrixError::Io`] if the file cannot be read, otherwise
/// whatever [`parse_matrix`] reports.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SmatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = parse_matrix(&text, path)?;
    debug!(
        "read {} x {} matrix with {} nonzeros from '{}'",
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// One row as `"<col+1> <value> "` pairs with `precision` decimals, ending in `-1`
fn format_row(matrix: &SparseMatrix, i: usize, precision: usize) -> String {
    let mut line: String = matrix
        .row_iter(i)
        .map(|(j, v)| format!("{} {:.*} ", j + 1, precision, v))
        .collect();
    line.push_str(&ROW_SENTINEL.to_string());
    line
}

/// Writes `matrix` in the text layout to any writer.
///
/// A `rows cols` header is followed by one line per row.
pub fn write_to<W: Write>(
    writer: &mut W,
    matrix: &SparseMatrix,
    precision: usize,
) -> std::io::Result<()> {
    writeln!(writer, "{} {}", matrix.n_rows(), matrix.n_cols())?;
    for i in 0..matrix.n_rows() {
        writeln!(writer, "{}", format_row(matrix, i, precision))?;
    }
    Ok(())
}

/// Renders `matrix` in the text layout
pub fn format_matrix(matrix: &SparseMatrix, precision: usize) -> String {
    let mut out = format!("{} {}\n", matrix.n_rows(), matrix.n_cols());
    for i in 0..matrix.n_rows() {
        out.push_str(&format_row(matrix, i, precision));
        out.push('\n');
    }
    out
}

/// Saves `matrix` to `path`, creating or truncating the file.
pub fn write_matrix<P: AsRef<Path>>(
    path: P,
    matrix: &SparseMatrix,
    config: &FormatConfig,
) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| SmatrixError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, matrix, config.write_precision).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(
        "wrote {} x {} matrix to '{}'",
        matrix.n_rows(),
        matrix.n_cols(),
        path.display()
    );
    Ok(())
}
