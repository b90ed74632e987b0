//! Error types for Validation Toolkit

use thiserror::Error;

/// Main error type for Validation Toolkit operations.
///
/// Failed validations are never reported through this type; they are
/// returned as [`EvaluationResult`](crate::EvaluationResult) data. This enum
/// only covers rules and settings that could not be built.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A predicate pattern failed to compile
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A range predicate was given bounds in the wrong order
    #[error("Invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: String, max: String },

    /// Error in validator configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Validation Toolkit operations
pub type Result<T> = std::result::Result<T, ToolkitError>;
