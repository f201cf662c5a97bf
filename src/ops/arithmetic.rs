//! Elementwise arithmetic, matrix products and integer powers.

use crate::core::traits::{MatShape, MatVec};
use crate::error::LaError;
use crate::matrix::Matrix;
use crate::vector::dot_prod;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// Elementwise sum. Both operands must have the same shape.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LaError> {
        if self.nrows() != other.nrows() {
            return Err(LaError::DimensionMismatch { expected: self.nrows(), found: other.nrows() });
        }
        if self.ncols() != other.ncols() {
            return Err(LaError::DimensionMismatch { expected: self.ncols(), found: other.ncols() });
        }
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| a + b)
            .collect();
        Matrix::from_row_major(self.nrows(), self.ncols(), data)
    }

    /// Multiply every entry by `s`.
    pub fn scale(&self, s: T) -> Self {
        let mut out = self.clone();
        for i in 0..out.nrows() {
            out.scale_row(i, s);
        }
        out
    }

    /// Matrix product `self · other`.
    ///
    /// Each entry is the dot product of a row of `self` with a row of
    /// `otherᵀ`. Requires `ncols(self) == nrows(other)`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, LaError> {
        if self.ncols() != other.nrows() {
            return Err(LaError::DimensionMismatch { expected: self.ncols(), found: other.nrows() });
        }
        let other_t = other.transpose();
        let mut res = Matrix::zeros(self.nrows(), other.ncols())?;
        for i in 0..self.nrows() {
            let row = self.row_slice(i);
            for j in 0..other_t.nrows() {
                res[(i, j)] = dot_prod(row, other_t.row_slice(j))?;
            }
        }
        Ok(res)
    }

    /// `self^p` by repeated squaring. `p = 0` gives the identity.
    pub fn pow(&self, p: u32) -> Result<Self, LaError> {
        let (h, w) = self.dim();
        if h != w {
            return Err(LaError::NonSquare { rows: h, cols: w });
        }
        match p {
            0 => Matrix::identity(h),
            1 => Ok(self.clone()),
            p if p % 2 == 0 => self.checked_mul(self)?.pow(p / 2),
            p => self.pow(p - 1)?.checked_mul(self),
        }
    }

    /// y = A x as a freshly allocated vector.
    pub fn mat_vec(&self, x: &[T]) -> Result<Vec<T>, LaError> {
        let mut y = vec![T::zero(); self.nrows()];
        self.matvec(&x.to_vec(), &mut y)?;
        Ok(y)
    }
}

impl<T: Float> MatVec<Vec<T>> for Matrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) -> Result<(), LaError> {
        if y.len() != self.nrows() {
            return Err(LaError::DimensionMismatch { expected: self.nrows(), found: y.len() });
        }
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = dot_prod(self.row_slice(i), x)?;
        }
        Ok(())
    }
}
