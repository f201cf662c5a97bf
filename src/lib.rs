//! rowred: dense matrix linear algebra built on row reduction
//!
//! This crate provides a small dense [`Matrix`] type with 1-based element
//! access, arithmetic, structural edits and the elimination family: row
//! echelon and reduced row echelon forms, determinants (by elimination and by
//! cofactor expansion), rank and nullity, inversion and linear solves.
//!
//! Every operation borrows its inputs and returns a new value; failures are
//! reported through [`LaError`].

pub mod config;
pub mod core;
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod solver;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use crate::core::{MatShape, MatVec};
pub use elimination::Echelon;
pub use error::LaError;
pub use matrix::*;
pub use solver::*;
pub use vector::{dot_prod, magnitude, unit_vector, vector_scale};
