//! Dense row-major matrix type.
//!
//! This module provides [`Matrix`], the value type every other module works on,
//! along with its constructors, 1-based element access, transposition and
//! conversion to and from `faer::Mat<T>`.
//!
//! The public accessors (`get`, `set`, `row`, `col`) use 1-based indices.
//! `Index<(usize, usize)>` is 0-based, matching `faer::Mat`.

use crate::core::traits::MatShape;
use crate::error::LaError;
use faer::Mat;
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// A dense `nrows × ncols` matrix stored row by row.
///
/// Both dimensions are at least 1; every constructor checks this, so a
/// `Matrix` is always rectangular and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    fn check_dims(nrows: usize, ncols: usize) -> Result<(), LaError> {
        if nrows == 0 || ncols == 0 {
            return Err(LaError::InvalidDimension { rows: nrows, cols: ncols });
        }
        Ok(())
    }

    /// An `h × w` matrix of zeros.
    pub fn zeros(h: usize, w: usize) -> Result<Self, LaError> {
        Self::check_dims(h, w)?;
        Ok(Self { nrows: h, ncols: w, data: vec![T::zero(); h * w] })
    }

    /// Zero matrix with ones at `(i, i)` for `i` in `1..=min(h, w)`.
    ///
    /// For `h != w` this is a rectangular "identity-like" matrix rather than
    /// an identity in the algebraic sense.
    pub fn partial_identity(h: usize, w: usize) -> Result<Self, LaError> {
        let mut m = Self::zeros(h, w)?;
        for i in 0..h.min(w) {
            m[(i, i)] = T::one();
        }
        Ok(m)
    }

    /// The `n × n` identity.
    pub fn identity(n: usize) -> Result<Self, LaError> {
        Self::partial_identity(n, n)
    }

    /// Build from 0-based `f(i, j)`.
    pub fn from_fn<F>(h: usize, w: usize, mut f: F) -> Result<Self, LaError>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::check_dims(h, w)?;
        let mut data = Vec::with_capacity(h * w);
        for i in 0..h {
            for j in 0..w {
                data.push(f(i, j));
            }
        }
        Ok(Self { nrows: h, ncols: w, data })
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(h: usize, w: usize, data: Vec<T>) -> Result<Self, LaError> {
        Self::check_dims(h, w)?;
        if data.len() != h * w {
            return Err(LaError::DimensionMismatch { expected: h * w, found: data.len() });
        }
        Ok(Self { nrows: h, ncols: w, data })
    }

    /// Construct from a list of rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LaError> {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        Self::check_dims(h, w)?;
        let mut data = Vec::with_capacity(h * w);
        for row in rows {
            if row.len() != w {
                return Err(LaError::DimensionMismatch { expected: w, found: row.len() });
            }
            data.extend(row);
        }
        Ok(Self { nrows: h, ncols: w, data })
    }

    /// Copy back out into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.ncols).map(<[T]>::to_vec).collect()
    }

    fn check_index(&self, i: usize, j: usize) -> Result<(), LaError> {
        if i == 0 || i > self.nrows || j == 0 || j > self.ncols {
            return Err(LaError::IndexOutOfBounds {
                row: i,
                col: j,
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(())
    }

    /// Element at 1-based `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<T, LaError> {
        self.check_index(i, j)?;
        Ok(self[(i - 1, j - 1)])
    }

    /// Overwrite the element at 1-based `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, x: T) -> Result<(), LaError> {
        self.check_index(i, j)?;
        self[(i - 1, j - 1)] = x;
        Ok(())
    }

    /// Copy of 1-based row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<T>, LaError> {
        self.check_index(i, 1)?;
        Ok(self.row_slice(i - 1).to_vec())
    }

    /// Copy of 1-based column `j`.
    pub fn col(&self, j: usize) -> Result<Vec<T>, LaError> {
        self.check_index(1, j)?;
        Ok((0..self.nrows).map(|i| self[(i, j - 1)]).collect())
    }

    /// `width × height` matrix with `result[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Self {
        let (h, w) = (self.nrows, self.ncols);
        let mut data = Vec::with_capacity(h * w);
        for j in 0..w {
            for i in 0..h {
                data.push(self[(i, j)]);
            }
        }
        Self { nrows: w, ncols: h, data }
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.ncols {
            self.data.swap(a * self.ncols + c, b * self.ncols + c);
        }
    }

    /// row[dst] ← row[dst] − factor · row[src]
    pub(crate) fn sub_scaled_row(&mut self, dst: usize, src: usize, factor: T) {
        let w = self.ncols;
        for c in 0..w {
            let v = self.data[src * w + c];
            self.data[dst * w + c] = self.data[dst * w + c] - factor * v;
        }
    }

    pub(crate) fn scale_row(&mut self, i: usize, s: T) {
        for x in &mut self.data[i * self.ncols..(i + 1) * self.ncols] {
            *x = *x * s;
        }
    }

    /// Copy from a faer matrix; empty inputs are rejected.
    pub fn from_faer(m: &Mat<T>) -> Result<Self, LaError> {
        Self::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }

    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self[(i, j)])
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.ncols + j]
    }
}
