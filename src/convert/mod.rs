pub mod bspline;
pub mod gregory;
mod gregory_tables;

pub use gregory::*;
