//! Error types for vector access and parsing.

use thiserror::Error;

/// Recoverable errors from the math types.
///
/// Contract violations (normalizing a zero vector, reflecting about a
/// non-unit normal) are not reported here; they panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Component index outside the vector's dimension.
    #[error("component index {index} out of range for a {len}-component vector")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of components in the vector.
        len: usize,
    },

    /// A component could not be parsed as a number.
    #[error("invalid vector component: {0}")]
    Parse(String),

    /// Text held the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    ComponentCount {
        /// Components required by the vector type.
        expected: usize,
        /// Components present in the input.
        found: usize,
    },
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;
