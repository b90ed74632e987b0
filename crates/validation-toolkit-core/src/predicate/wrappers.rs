//! Predicate wrappers for closures and constant predicates.

use super::traits::Predicate;

/// A predicate that always returns true.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruePredicate;

impl<T: ?Sized> Predicate<T> for TruePredicate {
    #[inline]
    fn evaluate(&self, _: &T) -> bool {
        true
    }
}

/// A predicate wrapping a closure.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::{FnPredicate, Predicate};
///
/// let positive = FnPredicate::new(|x: &i32| *x > 0);
/// assert!(positive.evaluate(&5));
/// assert!(!positive.evaluate(&-1));
///
/// let not_blank = FnPredicate::new(|s: &str| !s.trim().is_empty());
/// assert!(not_blank.evaluate("hello"));
/// assert!(!not_blank.evaluate("   "));
/// ```
#[derive(Clone, Copy)]
pub struct FnPredicate<F> {
    f: F,
}

impl<F> FnPredicate<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Predicate<T> for FnPredicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        (self.f)(input)
    }
}
