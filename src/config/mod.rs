//! Configuration for elimination-based algorithms.

pub mod options;
pub use options::{EliminationOptions, PivotStrategy};
