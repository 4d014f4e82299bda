//! Dense debug rendering
//!
//! Each row becomes one line `| v0 v1 ... |` with every column shown,
//! implicit zeros included, in C `%e` style scientific notation.

use std::fmt::{self, Write};

use crate::matrix::config::DEFAULT_PRINT_PRECISION;
use crate::matrix::SparseMatrix;

/// Formats `value` like C's `%.{precision}e` (`1.50000e+00`, `-2.00000e-03`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value).to_lowercase();
    }

    let rust = format!("{:.*e}", precision, value);
    match rust.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => rust,
    }
}

/// Writes the dense rendering of `matrix` into `out`
pub fn write_dense<W: Write>(
    out: &mut W,
    matrix: &SparseMatrix,
    precision: usize,
) -> fmt::Result {
    for i in 0..matrix.n_rows() {
        out.write_char('|')?;
        let mut stored = matrix.row(i).iter().peekable();
        for j in 0..matrix.n_cols() {
            while stored.next_if(|e| e.col < j).is_some() {}
            let value = match stored.peek() {
                Some(e) if e.col == j => e.value,
                _ => 0.0,
            };
            write!(out, " {}", format_scientific(value, precision))?;
        }
        out.write_str(" |\n")?;
    }
    Ok(())
}

/// Renders `matrix` as dense text lines
pub fn render(matrix: &SparseMatrix, precision: usize) -> String {
    format!("{:.*}", precision, matrix)
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRINT_PRECISION);
        write_dense(f, self, precision)
    }
}
