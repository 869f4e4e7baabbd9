//! Error types for matrix operations.

use tabula_core::{Coord, Shape};
use thiserror::Error;

/// Result type alias using [`MatrixError`].
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by matrix construction, access and algorithms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("invalid matrix dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A source array had rows of differing lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A coordinate lies outside the matrix.
    #[error("coordinate {coord} out of range for {shape} matrix")]
    OutOfRange {
        /// The rejected coordinate.
        coord: Coord,
        /// Shape of the matrix that was addressed.
        shape: Shape,
    },

    /// A square-only operation was applied to a non-square matrix.
    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare {
        /// The operation name.
        op: &'static str,
        /// Shape of the operand.
        shape: Shape,
    },

    /// Operand shapes do not fit the operation.
    #[error("cannot {op} {left} matrix with {right} matrix")]
    IncompatibleShape {
        /// The operation name.
        op: &'static str,
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },

    /// The determinant (or that of the normal equations) rounds to zero.
    #[error("matrix is singular")]
    Singular,
}
