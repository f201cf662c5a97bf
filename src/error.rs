use thiserror::Error;

// Unified error type for rowred

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix (indices are 1-based)")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("singular matrix")]
    SingularMatrix,
    #[error("invalid dimension {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("division by zero: vector has zero magnitude")]
    DivisionByZero,
    #[error("solver used before any factorization")]
    NotFactored,
}

/// Shorthand for results carrying [`LaError`].
pub type Result<T> = std::result::Result<T, LaError>;
