//! Error types for Terrawalk.

use thiserror::Error;

/// Top-level error type for terrain and agent operations.
///
/// Rejected moves are not errors; they are reported through
/// the move outcome instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrawalkError {
    /// A caller-supplied parameter is malformed (generator config,
    /// start position, direction token).
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A value produced upstream is unusable, e.g. a non-finite elevation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TerrawalkError {
    /// Shorthand for building an [`TerrawalkError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias for Terrawalk operations.
pub type TerrawalkResult<T> = Result<T, TerrawalkError>;
