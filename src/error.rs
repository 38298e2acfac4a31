// src/error.rs
//! Error type shared by the vector and line operations.

/// Errors raised by vector and line operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Input that cannot be turned into a valid vector, line or precision
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operands have different dimensions
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Every coordinate is within tolerance of zero
    #[error("No nonzero elements found")]
    NoNonzeroElements,

    /// Division by an exact zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Lines are parallel and distinct
    #[error("Lines are parallel and distinct: no intersection")]
    NoIntersection,

    /// Operation undefined for a zero-magnitude vector
    #[error("Degenerate input: {0}")]
    Degenerate(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
