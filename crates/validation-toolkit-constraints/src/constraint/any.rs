//! Type-erased constraints.

use std::fmt;

use validation_toolkit_core::EvaluationResult;

use super::traits::Constraint;

/// A boxed constraint over input `T` producing errors `E`.
///
/// Erasing the concrete predicate type lets constraints built from
/// different predicates share one collection.
pub struct AnyConstraint<T: ?Sized, E> {
    inner: Box<dyn Constraint<T, E>>,
}

impl<T: ?Sized, E> AnyConstraint<T, E> {
    /// Boxes `constraint`.
    pub fn new<C>(constraint: C) -> Self
    where
        C: Constraint<T, E> + 'static,
    {
        Self {
            inner: Box::new(constraint),
        }
    }
}

impl<T: ?Sized, E> Constraint<T, E> for AnyConstraint<T, E> {
    #[inline]
    fn evaluate(&self, input: &T) -> EvaluationResult<E> {
        self.inner.evaluate(input)
    }

    // Already erased; avoid boxing twice.
    fn erase(self) -> AnyConstraint<T, E>
    where
        Self: Sized + 'static,
    {
        self
    }
}

impl<T: ?Sized, E> fmt::Debug for AnyConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyConstraint").finish_non_exhaustive()
    }
}
