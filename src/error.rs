//! Error types.
//!
//! - [LinalgError]: failures of matrix and vector operations.
//! - [InterpolationError]: failures while fitting conditions or assembling chains.

use thiserror::Error;

/// Errors raised by [Matrix](crate::Matrix), [Vector](crate::Vector) and
/// [VectorTransformation](crate::VectorTransformation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Zero dimension or empty element source.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    /// Operands (or a vector and a matrix) have incompatible sizes.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Determinant, minor, cofactor or inverse requested on a rectangular matrix.
    #[error("operation requires a square matrix, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    /// Minors and cofactors are undefined for a 1x1 matrix.
    #[error("minor requires a matrix of size 2 or more")]
    MinorOfScalar,

    /// Determinant is exactly zero.
    #[error("matrix is degenerate: determinant is zero")]
    Degenerate,

    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Errors raised while building polynomials, conditions and interpolation chains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// A condition without any derivative values cannot define a polynomial.
    #[error("condition has no derivative values")]
    EmptyCondition,

    #[error("invalid chain configuration: {0}")]
    InvalidConfig(String),

    /// Node passed to `add_node` does not carry exactly `nodes_rank` values.
    #[error("node rank {got} does not match chain rank {expected}")]
    RankMismatch { expected: usize, got: usize },

    #[error("values layer has {got} entries, chain has {expected} nodes")]
    LayerLengthMismatch { expected: usize, got: usize },

    #[error("node {node} already holds {rank} values")]
    RankExceeded { node: usize, rank: usize },

    #[error("node {node} holds {rank} values, {expected} required")]
    IncompleteNode {
        node: usize,
        rank: usize,
        expected: usize,
    },

    #[error("chain needs at least 2 nodes, got {got}")]
    NotEnoughNodes { got: usize },
}
