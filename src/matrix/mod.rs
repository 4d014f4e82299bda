// Matrix data structures and operations

pub mod config;
pub mod product;
pub mod row;
pub mod sparse;

pub use config::FormatConfig;
pub use product::multiply;
pub use row::{Element, RowList};
pub use sparse::SparseMatrix;
