//! The shared constraint capability.

use std::sync::Arc;

use validation_toolkit_core::EvaluationResult;

use super::any::AnyConstraint;

/// A rule that evaluates an input to a single [`EvaluationResult`].
///
/// Every constraint flavour implements this trait, which is what lets
/// guards, set members and set conditions be mixed freely once erased.
///
/// # Example
///
/// ```
/// use validation_toolkit_constraints::Constraint;
/// use validation_toolkit_core::EvaluationResult;
///
/// struct NotAdmin;
///
/// impl Constraint<str, String> for NotAdmin {
///     fn evaluate(&self, input: &str) -> EvaluationResult<String> {
///         if input.eq_ignore_ascii_case("admin") {
///             EvaluationResult::Invalid(format!("`{input}` is reserved"))
///         } else {
///             EvaluationResult::Valid
///         }
///     }
/// }
///
/// assert!(NotAdmin.evaluate("ada").is_valid());
/// assert_eq!(
///     NotAdmin.evaluate("Admin").error().map(String::as_str),
///     Some("`Admin` is reserved")
/// );
/// ```
pub trait Constraint<T: ?Sized, E>: Send + Sync {
    /// Evaluates the input and returns exactly one result.
    fn evaluate(&self, input: &T) -> EvaluationResult<E>;

    /// Boxes this constraint behind the common [`AnyConstraint`] type.
    fn erase(self) -> AnyConstraint<T, E>
    where
        Self: Sized + 'static,
    {
        AnyConstraint::new(self)
    }
}

impl<T: ?Sized, E, C: Constraint<T, E> + ?Sized> Constraint<T, E> for Arc<C> {
    #[inline]
    fn evaluate(&self, input: &T) -> EvaluationResult<E> {
        (**self).evaluate(input)
    }
}
