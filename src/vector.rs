//! Operations on plain vectors (`&[T]`).
//!
//! Rows and columns of a [`crate::Matrix`] are handed to these functions as
//! slices; matrix multiplication is built on [`dot_prod`].

use crate::error::LaError;
use num_traits::Float;

/// Σ uᵢ·vᵢ. Fails when the lengths differ.
pub fn dot_prod<T: Float>(u: &[T], v: &[T]) -> Result<T, LaError> {
    if u.len() != v.len() {
        return Err(LaError::DimensionMismatch { expected: u.len(), found: v.len() });
    }
    Ok(u.iter()
        .zip(v.iter())
        .map(|(&a, &b)| a * b)
        .fold(T::zero(), |acc, x| acc + x))
}

/// Euclidean norm ‖v‖₂. Zero for an empty slice.
pub fn magnitude<T: Float>(v: &[T]) -> T {
    v.iter().map(|&x| x * x).fold(T::zero(), |acc, x| acc + x).sqrt()
}

pub fn vector_scale<T: Float>(v: &[T], s: T) -> Vec<T> {
    v.iter().map(|&x| x * s).collect()
}

/// `v / ‖v‖₂`; a zero-magnitude vector has no direction.
pub fn unit_vector<T: Float>(v: &[T]) -> Result<Vec<T>, LaError> {
    let mag = magnitude(v);
    if mag == T::zero() {
        return Err(LaError::DivisionByZero);
    }
    Ok(vector_scale(v, T::one() / mag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dot_product() {
        assert_eq!(dot_prod(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_eq!(
            dot_prod(&[1.0, 2.0], &[1.0]),
            Err(LaError::DimensionMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude::<f64>(&[]), 0.0);
    }

    #[test]
    fn scaling() {
        assert_eq!(vector_scale(&[1.0, -2.0], 3.0), vec![3.0, -6.0]);
    }

    #[test]
    fn unit_vectors() {
        let u = unit_vector(&[3.0, 4.0]).unwrap();
        assert_abs_diff_eq!(u[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(u[1], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(magnitude(&u), 1.0, epsilon = 1e-12);
        assert_eq!(unit_vector(&[0.0, 0.0]), Err(LaError::DivisionByZero));
        assert_eq!(unit_vector::<f64>(&[]), Err(LaError::DivisionByZero));
    }
}
