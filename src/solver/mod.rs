//! Direct solver interface.

use crate::core::traits::MatShape;

/// Statistics reported by a direct solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    /// Rank of the system matrix. Inversion only succeeds at full rank, so
    /// for a successful solve this is the system size `n`.
    pub rank: usize,
    /// ‖A x − b‖₂ for the returned solution.
    pub final_residual: T,
}

/// Common interface for direct solvers.
pub trait LinearSolver<M: MatShape, V> {
    type Error;
    /// Solve A·x = b, writing result into `x`.
    /// Returns solve stats (including the final residual).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
    type Scalar: Copy + PartialOrd;
}

pub mod gauss_jordan;
pub use gauss_jordan::GaussJordanSolver;
