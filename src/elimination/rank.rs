//! Rank and nullity from the row echelon form.

use crate::config::EliminationOptions;
use crate::core::traits::MatShape;
use crate::elimination::echelon::row_echelon_with;
use crate::matrix::Matrix;
use num_traits::Float;

/// `(rank, nullity)`: rank is the pivot count of the echelon form, the same
/// count `det` and `inverse` rely on; nullity is `width - rank`.
pub fn rank_null_with<T: Float>(m: &Matrix<T>, opts: &EliminationOptions<T>) -> (usize, usize) {
    let rank = row_echelon_with(m, opts).rank();
    (rank, m.ncols() - rank)
}

impl<T: Float> Matrix<T> {
    pub fn rank_null(&self) -> (usize, usize) {
        rank_null_with(self, &EliminationOptions::default())
    }

    pub fn rank_null_with(&self, opts: &EliminationOptions<T>) -> (usize, usize) {
        rank_null_with(self, opts)
    }
}
