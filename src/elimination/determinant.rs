//! Determinants: O(n³) by elimination and O(n!) by cofactor expansion.

use crate::config::EliminationOptions;
use crate::core::traits::MatShape;
use crate::elimination::echelon::row_echelon_with;
use crate::error::LaError;
use crate::matrix::Matrix;
use num_traits::Float;

fn require_square<T>(m: &Matrix<T>) -> Result<usize, LaError> {
    let (h, w) = m.dim();
    if h != w {
        return Err(LaError::NonSquare { rows: h, cols: w });
    }
    Ok(h)
}

/// Product of the echelon diagonal, negated once per row swap.
pub fn det_with<T: Float>(m: &Matrix<T>, opts: &EliminationOptions<T>) -> Result<T, LaError> {
    let n = require_square(m)?;
    let e = row_echelon_with(m, opts);
    if e.rank() < n {
        return Ok(T::zero());
    }
    let prod = (0..n).fold(T::one(), |acc, i| acc * e.matrix[(i, i)]);
    Ok(if e.swaps % 2 == 1 { -prod } else { prod })
}

/// Laplace expansion along the first row.
pub fn laplace_det<T: Float>(m: &Matrix<T>) -> Result<T, LaError> {
    let n = require_square(m)?;
    match n {
        1 => Ok(m[(0, 0)]),
        2 => Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
        _ => {
            let mut sum = T::zero();
            for j in 1..=n {
                let a = m.get(1, j)?;
                if a == T::zero() {
                    continue;
                }
                let minor = laplace_det(&m.sub_matrix(1, j)?)?;
                let term = a * minor;
                sum = if j % 2 == 1 { sum + term } else { sum - term };
            }
            Ok(sum)
        }
    }
}

impl<T: Float> Matrix<T> {
    /// Determinant via row echelon form.
    pub fn det(&self) -> Result<T, LaError> {
        det_with(self, &EliminationOptions::default())
    }

    pub fn det_with(&self, opts: &EliminationOptions<T>) -> Result<T, LaError> {
        det_with(self, opts)
    }

    /// Determinant via cofactor expansion. Exponential cost; meant for
    /// cross-checking [`Matrix::det`] on small inputs.
    pub fn laplace_det(&self) -> Result<T, LaError> {
        laplace_det(self)
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
    fn two_by_two() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.det().unwrap(), -2.0);
        assert_eq!(a.laplace_det().unwrap(), -2.0);
        assert_eq!(Matrix::<f64>::identity(2).unwrap().det().unwrap(), 1.0);
    }

    #[test]
    fn one_by_one() {
        let a = m(vec![vec![-7.0]]);
        assert_eq!(a.det().unwrap(), -7.0);
        assert_eq!(a.laplace_det().unwrap(), -7.0);
    }

    #[test]
    fn row_swap_flips_sign() {
        let a = m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(a.det().unwrap(), -1.0);
        assert_eq!(a.laplace_det().unwrap(), -1.0);
    }

    #[test]
    fn four_by_four_methods_agree() {
        let a = m(vec![
            vec![1.0, 3.0, 4.0, 12.0],
            vec![2.0, 3.0, 5.0, 54.0],
            vec![3.0, 10.0, 4.0, 3.0],
            vec![2.0, 54.0, 67.0, 9.0],
        ]);
        let d = a.det().unwrap();
        let l = a.laplace_det().unwrap();
        assert_abs_diff_eq!(d, l, epsilon = 1e-6 * l.abs());
    }

    #[test]
    fn singular_is_zero() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0], vec![0.0, 1.0, 5.0]]);
        assert_eq!(a.det().unwrap(), 0.0);
        assert_eq!(a.laplace_det().unwrap(), 0.0);
    }

    #[test]
    fn non_square_fails() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.det(), Err(LaError::NonSquare { rows: 2, cols: 3 }));
        assert_eq!(a.laplace_det(), Err(LaError::NonSquare { rows: 2, cols: 3 }));
    }
}
