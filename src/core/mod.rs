//! Core traits shared by the matrix, arithmetic and solver modules.

pub mod traits;
pub use traits::{MatShape, MatVec};
