//! Options controlling Gaussian elimination.
//!
//! This module provides the `EliminationOptions` struct, which is threaded
//! through every routine in [`crate::elimination`]. It fixes the tolerance
//! below which an entry counts as zero and the rule used to pick pivots.

use num_traits::Float;

/// How a pivot row is chosen for each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Keep the current row unless its entry is zero, then take the first
    /// nonzero entry below it.
    #[default]
    FirstNonZero,
    /// Always take the entry of largest magnitude at or below the current row.
    Partial,
}

/// Elimination tolerances & pivoting rule.
#[derive(Debug, Clone, Copy)]
pub struct EliminationOptions<T> {
    /// Relative tolerance: an entry is zero when `|x| <= zero_tol * scale`,
    /// where `scale` is the largest magnitude in its column of the input.
    pub zero_tol: T,

    /// Pivot selection rule.
    pub pivoting: PivotStrategy,
}

impl<T: Float> EliminationOptions<T> {
    pub fn new(zero_tol: T, pivoting: PivotStrategy) -> Self {
        Self { zero_tol, pivoting }
    }

    pub fn with_zero_tol(mut self, zero_tol: T) -> Self {
        self.zero_tol = zero_tol;
        self
    }

    pub fn with_pivoting(mut self, pivoting: PivotStrategy) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Zero test relative to `scale`, the magnitude of the entries `x` is
    /// compared against. A zero `scale` only accepts exact zeros.
    #[inline]
    pub fn is_negligible(&self, x: T, scale: T) -> bool {
        x.abs() <= self.zero_tol * scale
    }
}

impl<T: Float> Default for EliminationOptions<T> {
    fn default() -> Self {
        Self::new(T::epsilon().sqrt(), PivotStrategy::default())
    }
}
