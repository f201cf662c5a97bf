//! Core linear-algebra traits for rowred.

use crate::error::LaError;

/// Shape queries shared by dense matrix types.
pub trait MatShape {
    /// Number of rows (height).
    fn nrows(&self) -> usize;
    /// Number of columns (width).
    fn ncols(&self) -> usize;

    /// `(height, width)`, always recomputed from the matrix itself.
    fn dim(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x, failing when `x` or `y` has the wrong length.
    fn matvec(&self, x: &V, y: &mut V) -> Result<(), LaError>;
}
