//! Structural edits: deleting a row and column, appending, augmenting.

use crate::core::traits::MatShape;
use crate::error::LaError;
use crate::matrix::Matrix;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// Copy with 1-based row `i` and column `j` removed (the minor used for
    /// cofactor expansion).
    pub fn sub_matrix(&self, i: usize, j: usize) -> Result<Self, LaError> {
        let (h, w) = self.dim();
        if i == 0 || i > h || j == 0 || j > w {
            return Err(LaError::IndexOutOfBounds { row: i, col: j, rows: h, cols: w });
        }
        let mut data = Vec::with_capacity((h - 1) * (w - 1));
        for r in (0..h).filter(|&r| r != i - 1) {
            for c in (0..w).filter(|&c| c != j - 1) {
                data.push(self[(r, c)]);
            }
        }
        Matrix::from_row_major(h - 1, w - 1, data)
    }

    /// Copy extended on the right by column `c`.
    pub fn append_col(&self, c: &[T]) -> Result<Self, LaError> {
        let (h, w) = self.dim();
        if c.len() != h {
            return Err(LaError::DimensionMismatch { expected: h, found: c.len() });
        }
        Matrix::from_fn(h, w + 1, |r, k| if k < w { self[(r, k)] } else { c[r] })
    }

    /// Copy extended at the bottom by row `r`.
    pub fn append_row(&self, r: &[T]) -> Result<Self, LaError> {
        let (h, w) = self.dim();
        if r.len() != w {
            return Err(LaError::DimensionMismatch { expected: w, found: r.len() });
        }
        let mut data = self.as_slice().to_vec();
        data.extend_from_slice(r);
        Matrix::from_row_major(h + 1, w, data)
    }

    /// `[self | other]`, appending the columns of `other` one at a time.
    pub fn augment(&self, other: &Self) -> Result<Self, LaError> {
        if self.nrows() != other.nrows() {
            return Err(LaError::DimensionMismatch { expected: self.nrows(), found: other.nrows() });
        }
        let other_t = other.transpose();
        let mut out = self.clone();
        for k in 0..other_t.nrows() {
            out = out.append_col(other_t.row_slice(k))?;
        }
        Ok(out)
    }
}
