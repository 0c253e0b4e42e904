//! Error taxonomy shared by every exacta type.

use std::fmt;

use thiserror::Error;

/// Dimensions of an operand, rows by columns.
///
/// Vectors report their length as `rows` and `1` as `cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Creates a shape.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a vector with `len` entries.
    #[must_use]
    pub const fn vector(len: usize) -> Self {
        Self { rows: len, cols: 1 }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Failures raised by scalar, vector and matrix operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand dimensions are incompatible for the requested operation.
    #[error("size mismatch: expected {expected}, found {found}")]
    SizeMismatch {
        /// Shape the operation required.
        expected: Shape,
        /// Shape it was given.
        found: Shape,
    },

    /// A row vector was added to or subtracted from a column vector.
    #[error("cannot combine a row vector with a column vector")]
    OrientationMismatch,

    /// Determinant, inverse, trace or adjugate of a non-square matrix.
    #[error("operation requires a square matrix, got {0}")]
    NonsquareMatrix(Shape),

    /// Text that should hold an integer does not.
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),

    /// A denominator reduced to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Input exceeds the configured entry-count or magnitude ceiling.
    #[error("size limit exceeded: {0}")]
    SizeLimitExceeded(String),

    /// Input text does not follow the expected layout.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Result alias used throughout exacta.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Longest piece of user input quoted back in an error message.
pub const EXCERPT_CHARS: usize = 24;

/// Shortens user input for an error message, marking any cut with `...`.
#[must_use]
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
