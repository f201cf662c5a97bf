//! Inversion by Gauss–Jordan elimination of `[A | I]`, and solving `A x = b`.

use crate::config::EliminationOptions;
use crate::core::traits::MatShape;
use crate::elimination::echelon::reduced_row_echelon_with;
use crate::error::LaError;
use crate::matrix::Matrix;
use log::debug;
use num_traits::Float;

/// `A⁻¹`, or `SingularMatrix` when the left block of `[A | I]` lacks a
/// pivot in some column.
pub fn inverse_with<T: Float>(m: &Matrix<T>, opts: &EliminationOptions<T>) -> Result<Matrix<T>, LaError> {
    let (h, w) = m.dim();
    if h != w {
        return Err(LaError::NonSquare { rows: h, cols: w });
    }
    let n = h;
    let aug = m.augment(&Matrix::identity(n)?)?;
    let e = reduced_row_echelon_with(&aug, opts);
    let left_pivots = e.pivot_cols().filter(|&c| c < n).count();
    if left_pivots < n {
        debug!("inverse: {n}x{n} matrix has only {left_pivots} pivots, singular");
        return Err(LaError::SingularMatrix);
    }
    Matrix::from_fn(n, n, |i, j| e.matrix[(i, n + j)])
}

/// `x = A⁻¹ b` for every column of `b`.
pub fn solve_with<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    opts: &EliminationOptions<T>,
) -> Result<Matrix<T>, LaError> {
    inverse_with(a, opts)?.checked_mul(b)
}

impl<T: Float> Matrix<T> {
    pub fn inverse(&self) -> Result<Matrix<T>, LaError> {
        inverse_with(self, &EliminationOptions::default())
    }

    pub fn inverse_with(&self, opts: &EliminationOptions<T>) -> Result<Matrix<T>, LaError> {
        inverse_with(self, opts)
    }

    /// Solve `self · x = b`.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, LaError> {
        solve_with(self, b, &EliminationOptions::default())
    }

    pub fn solve_with(&self, b: &Matrix<T>, opts: &EliminationOptions<T>) -> Result<Matrix<T>, LaError> {
        solve_with(self, b, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn inverse_of_identity_is_identity() {
        let i = Matrix::<f64>::identity(2).unwrap();
        assert_eq!(i.inverse().unwrap(), i);
    }

    #[test]
    fn inverse_of_2x2() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.inverse().unwrap(), m(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]));
    }

    #[test]
    fn inverse_needs_row_swap() {
        let a = m(vec![vec![0.0, 2.0], vec![4.0, 0.0]]);
        assert_eq!(a.inverse().unwrap(), m(vec![vec![0.0, 0.25], vec![0.5, 0.0]]));
    }

    #[test]
    fn singular_inverse_fails() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(a.inverse(), Err(LaError::SingularMatrix));
        let z = Matrix::<f64>::zeros(3, 3).unwrap();
        assert_eq!(z.inverse(), Err(LaError::SingularMatrix));
    }

    #[test]
    fn non_square_inverse_fails() {
        let a = m(vec![vec![1.0, 3.0], vec![5.0, 6.0], vec![4.0, 3.0]]);
        assert_eq!(a.inverse(), Err(LaError::NonSquare { rows: 3, cols: 2 }));
    }

    #[test]
    fn solve_3x3() {
        // [[2,1,1],[1,3,2],[1,0,0]] x = [4,5,6] has x = [6,15,-23]
        let a = m(vec![vec![2.0, 1.0, 1.0], vec![1.0, 3.0, 2.0], vec![1.0, 0.0, 0.0]]);
        let b = m(vec![vec![4.0], vec![5.0], vec![6.0]]);
        let x = a.solve(&b).unwrap();
        for (xi, ei) in x.as_slice().iter().zip([6.0, 15.0, -23.0]) {
            assert_abs_diff_eq!(*xi, ei, epsilon = 1e-10);
        }
    }

    #[test]
    fn solve_inherits_failures() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let b = m(vec![vec![1.0], vec![1.0]]);
        assert_eq!(a.solve(&b), Err(LaError::SingularMatrix));
        let ok = m(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let wrong = m(vec![vec![1.0], vec![1.0], vec![1.0]]);
        assert!(matches!(ok.solve(&wrong), Err(LaError::DimensionMismatch { .. })));
    }
}
