//! Direct dense solver by Gauss–Jordan inversion.
//!
//! `GaussJordanSolver` inverts `A` through [`crate::elimination::inverse_with`],
//! caches the inverse for reuse on further right-hand sides, and reports the
//! residual ‖A x − b‖₂ of each solve.
//!
//! # Usage
//! - Use `solve` for a fresh matrix; it replaces any cached inverse.
//! - Use `solve_cached` to apply the last inverse to another right-hand side.

use crate::config::EliminationOptions;
use crate::core::traits::{MatShape, MatVec};
use crate::elimination::inverse_with;
use crate::error::LaError;
use crate::matrix::Matrix;
use crate::solver::{LinearSolver, SolveStats};
use crate::vector::magnitude;
use log::debug;
use num_traits::Float;

/// Gauss–Jordan solver.
///
/// Stores the inverse for reuse (if computed).
pub struct GaussJordanSolver<T> {
    opts: EliminationOptions<T>,
    /// Cached inverse (if computed)
    inverse: Option<Matrix<T>>,
}

impl<T: Float> GaussJordanSolver<T> {
    /// Create a new solver (no inverse yet).
    pub fn new(opts: EliminationOptions<T>) -> Self {
        GaussJordanSolver { opts, inverse: None }
    }

    pub fn options(&self) -> &EliminationOptions<T> {
        &self.opts
    }

    /// The cached inverse from the last successful `solve`.
    pub fn cached_inverse(&self) -> Option<&Matrix<T>> {
        self.inverse.as_ref()
    }

    /// Solve using the cached inverse.
    ///
    /// # Errors
    /// `NotFactored` if no `solve` has succeeded yet; `DimensionMismatch`
    /// when `b` or `x` has the wrong length.
    pub fn solve_cached(&self, b: &[T], x: &mut Vec<T>) -> Result<(), LaError> {
        let inv = self.inverse.as_ref().ok_or(LaError::NotFactored)?;
        if x.len() != inv.nrows() {
            return Err(LaError::DimensionMismatch { expected: inv.nrows(), found: x.len() });
        }
        inv.matvec(&b.to_vec(), x)
    }
}

impl<T: Float> Default for GaussJordanSolver<T> {
    fn default() -> Self {
        Self::new(EliminationOptions::default())
    }
}

impl<T: Float> LinearSolver<Matrix<T>, Vec<T>> for GaussJordanSolver<T> {
    type Error = LaError;
    type Scalar = T;

    /// Solve Ax = b.
    ///
    /// # Arguments
    /// * `a` - Square matrix
    /// * `b` - Right-hand side vector
    /// * `x` - On input: ignored; on output: solution vector, resized to fit
    fn solve(&mut self, a: &Matrix<T>, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, LaError> {
        if b.len() != a.nrows() {
            return Err(LaError::DimensionMismatch { expected: a.nrows(), found: b.len() });
        }
        // a failed inversion must not leave a stale inverse behind
        self.inverse = None;
        let inv = inverse_with(a, &self.opts)?;
        *x = inv.mat_vec(b)?;
        self.inverse = Some(inv);

        let ax = a.mat_vec(x)?;
        let r: Vec<T> = ax.iter().zip(b.iter()).map(|(&p, &q)| p - q).collect();
        let stats = SolveStats { rank: a.nrows(), final_residual: magnitude(&r) };
        debug!(
            "gauss-jordan solve: n = {}, residual = {:e}",
            stats.rank,
            stats.final_residual.to_f64().unwrap_or(f64::NAN)
        );
        Ok(stats)
    }
}
