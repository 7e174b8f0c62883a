//! Error types for fuzzy set and relation operations.

use thiserror::Error;

/// Errors raised when an operation's preconditions are not met.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// Membership function parameters don't describe a valid shape.
    #[error("invalid {function} parameters: {reason}")]
    InvalidParameters { function: &'static str, reason: String },

    /// Element-wise set operation on arrays of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Composition where the inner dimensions disagree.
    #[error("cannot compose {}x{} with {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },

    /// Property check on a relation that isn't square.
    #[error("relation must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Rows have different lengths.
    #[error("row {row} has {got} columns (expected {expected})")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("membership degree {value} is outside [0, 1]")]
    DegreeOutOfRange { value: f64 },

    #[error("duplicate label {0:?}")]
    DuplicateLabel(String),

    #[error("alpha must be a number")]
    InvalidAlpha,

    /// The output grid of the extension principle has no points.
    #[error("output domain is empty")]
    EmptyDomain,
}

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;
