//! Elimination-based algorithms: echelon forms, determinants, rank and
//! nullity, inversion and linear solves.
//!
//! Every routine comes in two forms: an inherent method on
//! [`crate::Matrix`] using [`EliminationOptions::default`], and a
//! `*_with` variant taking explicit options.
//!
//! [`EliminationOptions::default`]: crate::config::EliminationOptions

pub mod determinant;
pub mod echelon;
pub mod inverse;
pub mod rank;

pub use determinant::{det_with, laplace_det};
pub use echelon::{Echelon, reduced_row_echelon_with, row_echelon_with};
pub use inverse::{inverse_with, solve_with};
pub use rank::rank_null_with;
