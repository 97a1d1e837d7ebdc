//! Error types for matrix operations

use thiserror::Error;

/// Errors that can occur during complex-matrix operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Elementwise operation on matrices of different shapes
    #[error("Shape mismatch: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Data buffer length disagrees with the requested shape
    #[error("Buffer of length {actual} cannot fill a matrix of {expected} entries")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Matrix product with incompatible inner dimensions
    #[error("Cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    IncompatibleProduct {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Square matrix required
    #[error("Matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },

    /// Qubit-shaped matrix required (2^n x 2^n or 2^n x 1)
    #[error("Matrix is {rows}x{cols}, expected 2^{num_bits} rows with square or column shape")]
    NotQubitShaped {
        rows: usize,
        cols: usize,
        num_bits: usize,
    },

    /// n-ary operation invoked with no operands
    #[error("Operand list is empty")]
    EmptyOperandList,
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
