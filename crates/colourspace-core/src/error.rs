//! Error types for colourspace

use thiserror::Error;

/// Result type for colourspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colourspace operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Operand shapes are incompatible (product inner dimensions, or sum shapes)
    #[error("Dimension mismatch: {left_rows}x{left_columns} against {right_rows}x{right_columns}")]
    DimensionMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    /// Operation is only defined for square matrices
    #[error("Matrix is not square: {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    /// Determinant is zero (or not finite), so no inverse exists
    #[error("Matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    /// Row lengths differ at construction
    #[error("Ragged matrix: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// 1-based index outside the matrix
    #[error("Entry ({row}, {column}) out of range for {rows}x{columns} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Use case input lacks a named component
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Colour space or illuminant name not recognised
    #[error("Unknown name: {0}")]
    UnknownName(String),
}
