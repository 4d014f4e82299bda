//! Reading, writing and printing matrices

pub mod print;
pub mod text;

pub use print::{format_scientific, render};
pub use text::{format_matrix, parse_matrix, read_matrix, write_matrix};
