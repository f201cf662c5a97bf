//! Matrix module: the dense matrix type and its text rendering.

pub mod dense;
pub use dense::Matrix;
pub mod display;
