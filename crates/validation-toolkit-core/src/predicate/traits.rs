//! The predicate capability and its blanket implementations.

use std::sync::Arc;

/// A pure boolean test over an input value.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::Predicate;
///
/// struct MinimumAge {
///     years: u32,
/// }
///
/// impl Predicate<u32> for MinimumAge {
///     fn evaluate(&self, age: &u32) -> bool {
///         *age >= self.years
///     }
/// }
///
/// let adult = MinimumAge { years: 18 };
/// assert!(adult.evaluate(&21));
/// assert!(!adult.evaluate(&16));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Returns true if the input satisfies the predicate.
    fn evaluate(&self, input: &T) -> bool;
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        (**self).evaluate(input)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        (**self).evaluate(input)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Arc<P> {
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        (**self).evaluate(input)
    }
}
