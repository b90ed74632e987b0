//! Error values bound to test constraints.

use thiserror::Error;

/// Errors used by the toolkit's own tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestError {
    #[error("must be positive")]
    MustBePositive,

    #[error("must be even")]
    MustBeEven,

    #[error("field is required")]
    Required,

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("invalid input")]
    InvalidInput,
}
