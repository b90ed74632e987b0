//! Predicate composition types for combining predicates with boolean logic.

use super::traits::Predicate;

/// Combines two predicates with AND semantics.
///
/// The second predicate is not evaluated when the first one fails.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::{AndPredicate, FnPredicate, Predicate};
///
/// let p1 = FnPredicate::new(|x: &i32| *x > 5);
/// let p2 = FnPredicate::new(|x: &i32| *x < 15);
/// let combined = AndPredicate::new(p1, p2);
///
/// assert!(combined.evaluate(&10));
/// assert!(!combined.evaluate(&3));
/// assert!(!combined.evaluate(&20));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AndPredicate<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AndPredicate<P1, P2> {
    /// Creates a combined predicate.
    #[inline]
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, P1, P2> Predicate<T> for AndPredicate<P1, P2>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
{
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self.first.evaluate(input) && self.second.evaluate(input)
    }
}

/// Combines two predicates with OR semantics.
///
/// The second predicate is not evaluated when the first one holds.
#[derive(Debug, Clone, Copy)]
pub struct OrPredicate<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> OrPredicate<P1, P2> {
    /// Creates a combined predicate.
    #[inline]
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, P1, P2> Predicate<T> for OrPredicate<P1, P2>
where
    P1: Predicate<T>,
    P2: Predicate<T>,
{
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self.first.evaluate(input) || self.second.evaluate(input)
    }
}

/// Inverts a predicate.
#[derive(Debug, Clone, Copy)]
pub struct NotPredicate<P> {
    inner: P,
}

impl<P> NotPredicate<P> {
    #[inline]
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for NotPredicate<P> {
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        !self.inner.evaluate(input)
    }
}

/// Fluent combinators available on every predicate.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::{FnPredicate, Predicate, PredicateExt};
///
/// let even = FnPredicate::new(|x: &i32| x % 2 == 0);
/// let negative = FnPredicate::new(|x: &i32| *x < 0);
///
/// let even_or_negative = even.or(negative);
/// assert!(even_or_negative.evaluate(&4));
/// assert!(even_or_negative.evaluate(&-3));
/// assert!(!even_or_negative.evaluate(&3));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Requires both `self` and `other` to hold.
    fn and<P: Predicate<T>>(self, other: P) -> AndPredicate<Self, P> {
        AndPredicate::new(self, other)
    }

    /// Requires `self` or `other` to hold.
    fn or<P: Predicate<T>>(self, other: P) -> OrPredicate<Self, P> {
        OrPredicate::new(self, other)
    }

    /// Inverts `self`.
    fn negate(self) -> NotPredicate<Self> {
        NotPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}
