//! A predicate bound to an error.

use std::fmt;

use validation_toolkit_core::{EvaluationResult, FnPredicate, Predicate};

use super::error_source::ErrorSource;
use super::traits::Constraint;

/// Links a [`Predicate`] to the error that describes why it failed.
///
/// # Example
///
/// ```
/// use validation_toolkit_constraints::{Constraint, SimpleConstraint};
/// use validation_toolkit_core::EvaluationResult;
///
/// let positive = SimpleConstraint::from_fn(|x: &i32| *x > 0, "must be positive");
/// assert_eq!(positive.evaluate(&5), EvaluationResult::Valid);
/// assert_eq!(positive.evaluate(&-1), EvaluationResult::Invalid("must be positive"));
///
/// // Input-dependent errors are built only when the predicate fails.
/// let short = SimpleConstraint::with_error_builder(
///     validation_toolkit_core::FnPredicate::new(|s: &str| s.len() <= 5),
///     |s: &str| format!("`{s}` is longer than 5 characters"),
/// );
/// assert!(short.evaluate("ok").is_valid());
/// assert_eq!(
///     short.evaluate("too long").into_error().as_deref(),
///     Some("`too long` is longer than 5 characters")
/// );
/// ```
pub struct SimpleConstraint<T: ?Sized, E, P> {
    predicate: P,
    error: ErrorSource<T, E>,
}

impl<T: ?Sized, E, P> SimpleConstraint<T, E, P>
where
    P: Predicate<T>,
{
    /// Creates a constraint that reports `error` whenever `predicate` fails.
    pub fn new(predicate: P, error: E) -> Self {
        Self {
            predicate,
            error: ErrorSource::fixed(error),
        }
    }

    /// Creates a constraint whose error is built from the failing input.
    pub fn with_error_builder<F>(predicate: P, builder: F) -> Self
    where
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        Self {
            predicate,
            error: ErrorSource::builder(builder),
        }
    }

    /// Creates a constraint from an already assembled error source.
    pub fn with_error_source(predicate: P, error: ErrorSource<T, E>) -> Self {
        Self { predicate, error }
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn error_source(&self) -> &ErrorSource<T, E> {
        &self.error
    }
}

impl<T: ?Sized, E, F> SimpleConstraint<T, E, FnPredicate<F>>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    /// Creates a constraint from a closure predicate and a fixed error.
    pub fn from_fn(predicate: F, error: E) -> Self {
        Self::new(FnPredicate::new(predicate), error)
    }
}

impl<T: ?Sized, E, P> Constraint<T, E> for SimpleConstraint<T, E, P>
where
    P: Predicate<T>,
    E: Clone + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &T) -> EvaluationResult<E> {
        if self.predicate.evaluate(input) {
            EvaluationResult::Valid
        } else {
            EvaluationResult::Invalid(self.error.resolve(input))
        }
    }
}

impl<T: ?Sized, E: fmt::Debug, P> fmt::Debug for SimpleConstraint<T, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleConstraint")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
