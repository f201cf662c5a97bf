//! Forward elimination (row echelon form) and Gauss–Jordan back
//! substitution (reduced row echelon form).
//!
//! Pivots are tracked per row as `(row, col)` pairs, so a pivot need not sit
//! on the diagonal: columns without a usable entry are skipped and the next
//! column is tried for the same row. This makes both routines valid for
//! tall, wide and rank-deficient inputs.
//!
//! A candidate pivot counts as zero when it is negligible next to the largest
//! entry of its column in the input, so uniformly small columns keep their
//! pivots.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.2

use crate::config::{EliminationOptions, PivotStrategy};
use crate::core::traits::MatShape;
use crate::matrix::Matrix;
use log::trace;
use num_traits::Float;

/// Result of an elimination pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Echelon<T> {
    /// The reduced matrix.
    pub matrix: Matrix<T>,
    /// 0-based `(row, col)` of every pivot, top to bottom.
    pub pivots: Vec<(usize, usize)>,
    /// Number of row interchanges performed.
    pub swaps: usize,
}

impl<T> Echelon<T> {
    /// Number of pivots found.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Pivot columns, in row order.
    pub fn pivot_cols(&self) -> impl Iterator<Item = usize> + '_ {
        self.pivots.iter().map(|&(_, c)| c)
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }
}

/// Largest magnitude in each column, the reference scale for zero tests.
fn column_scales<T: Float>(m: &Matrix<T>) -> Vec<T> {
    let (h, w) = m.dim();
    (0..w)
        .map(|c| (0..h).fold(T::zero(), |acc, i| acc.max(m[(i, c)].abs())))
        .collect()
}

/// Row index in `r..` holding the pivot for column `c`, if any.
fn find_pivot<T: Float>(
    a: &Matrix<T>,
    r: usize,
    c: usize,
    scale: T,
    opts: &EliminationOptions<T>,
) -> Option<usize> {
    let h = a.nrows();
    let usable = |k: &usize| !opts.is_negligible(a[(*k, c)], scale);
    match opts.pivoting {
        PivotStrategy::FirstNonZero => (r..h).find(usable),
        PivotStrategy::Partial => (r..h)
            .filter(usable)
            .fold(None, |best: Option<usize>, k| match best {
                Some(b) if a[(b, c)].abs() >= a[(k, c)].abs() => Some(b),
                _ => Some(k),
            }),
    }
}

/// Row echelon form of `m` by forward elimination.
pub fn row_echelon_with<T: Float>(m: &Matrix<T>, opts: &EliminationOptions<T>) -> Echelon<T> {
    let mut a = m.clone();
    let (h, w) = a.dim();
    let scales = column_scales(m);
    let mut pivots = Vec::with_capacity(h.min(w));
    let mut swaps = 0;
    let mut r = 0;

    for c in 0..w {
        if r == h {
            break;
        }
        let Some(k) = find_pivot(&a, r, c, scales[c], opts) else {
            trace!("column {c} has no pivot at or below row {r}");
            continue;
        };
        if k != r {
            trace!("swapping rows {r} and {k} for column {c}");
            a.swap_rows(r, k);
            swaps += 1;
        }
        let p = a[(r, c)];
        for j in (r + 1)..h {
            let x = a[(j, c)];
            if x != T::zero() {
                a.sub_scaled_row(j, r, x / p);
            }
            // exact zero below the pivot, whatever rounding left behind
            a[(j, c)] = T::zero();
        }
        pivots.push((r, c));
        r += 1;
    }

    Echelon { matrix: a, pivots, swaps }
}

/// Reduced row echelon form of `m`: unit pivots with zeros above and below.
pub fn reduced_row_echelon_with<T: Float>(
    m: &Matrix<T>,
    opts: &EliminationOptions<T>,
) -> Echelon<T> {
    let mut e = row_echelon_with(m, opts);
    let a = &mut e.matrix;
    for &(r, c) in e.pivots.iter().rev() {
        let p = a[(r, c)];
        a.scale_row(r, T::one() / p);
        a[(r, c)] = T::one();
        for i in 0..r {
            let x = a[(i, c)];
            if x != T::zero() {
                a.sub_scaled_row(i, r, x);
                a[(i, c)] = T::zero();
            }
        }
    }
    e
}

impl<T: Float> Matrix<T> {
    /// Row echelon form with default options.
    pub fn row_echelon(&self) -> Echelon<T> {
        row_echelon_with(self, &EliminationOptions::default())
    }

    pub fn row_echelon_with(&self, opts: &EliminationOptions<T>) -> Echelon<T> {
        row_echelon_with(self, opts)
    }

    /// Reduced row echelon form with default options.
    pub fn rre(&self) -> Matrix<T> {
        self.rre_with(&EliminationOptions::default())
    }

    pub fn rre_with(&self, opts: &EliminationOptions<T>) -> Matrix<T> {
        reduced_row_echelon_with(self, opts).into_matrix()
    }
}
