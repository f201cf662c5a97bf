//! Tests for the dense matrix basics, vector operations and arithmetic.
//!
//! These tests exercise the public API end to end, including the algebraic
//! identities that must hold for random inputs.

use approx::assert_abs_diff_eq;
use rand::Rng;
use rowred::{LaError, MatShape, Matrix, dot_prod, magnitude};

fn random_matrix(h: usize, w: usize) -> Matrix<f64> {
    let mut rng = rand::thread_rng();
    Matrix::from_fn(h, w, |_, _| rng.gen_range(-10.0..10.0)).unwrap()
}

/// Multiplying by the identity on either side leaves a square matrix unchanged.
#[test]
fn identity_is_neutral_for_multiplication() {
    for n in 1..6 {
        let m = random_matrix(n, n);
        let i = Matrix::identity(n).unwrap();
        assert_eq!(m.checked_mul(&i).unwrap(), m);
        assert_eq!(i.checked_mul(&m).unwrap(), m);
    }
}

/// Transposing twice gives the original matrix back for any shape.
#[test]
fn double_transpose_is_identity() {
    for (h, w) in [(1, 1), (1, 4), (3, 2), (5, 5), (2, 7)] {
        let m = random_matrix(h, w);
        assert_eq!(m.transpose().dim(), (w, h));
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn sample_matrix_shape_and_transpose() {
    let m = Matrix::from_rows(vec![vec![1.0, 3.0], vec![5.0, 6.0], vec![4.0, 3.0]]).unwrap();
    assert_eq!(m.dim(), (3, 2));
    assert_eq!(
        m.transpose(),
        Matrix::from_rows(vec![vec![1.0, 5.0, 4.0], vec![3.0, 6.0, 3.0]]).unwrap()
    );
}

#[test]
fn dot_and_magnitude() {
    assert_eq!(dot_prod(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
    assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
}

#[test]
fn mismatched_product_fails() {
    let a = random_matrix(2, 3);
    let b = random_matrix(2, 2);
    assert!(matches!(a.checked_mul(&b), Err(LaError::DimensionMismatch { .. })));
}

/// A^5 by squaring matches five successive products.
#[test]
fn power_matches_repeated_multiplication() {
    let m = random_matrix(3, 3).scale(0.1);
    let mut expected = m.clone();
    for _ in 1..5 {
        expected = expected.checked_mul(&m).unwrap();
    }
    let got = m.pow(5).unwrap();
    for (x, y) in got.as_slice().iter().zip(expected.as_slice()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
    }
}

/// (A + B)ᵀ = Aᵀ + Bᵀ and (AB)ᵀ = BᵀAᵀ.
#[test]
fn transpose_distributes() {
    let a = random_matrix(3, 4);
    let b = random_matrix(3, 4);
    let c = random_matrix(4, 2);
    assert_eq!(
        a.checked_add(&b).unwrap().transpose(),
        a.transpose().checked_add(&b.transpose()).unwrap()
    );
    let lhs = a.checked_mul(&c).unwrap().transpose();
    let rhs = c.transpose().checked_mul(&a.transpose()).unwrap();
    for (x, y) in lhs.as_slice().iter().zip(rhs.as_slice()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
    }
}
