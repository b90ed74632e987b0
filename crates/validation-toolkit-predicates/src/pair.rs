//! Pair predicates.

use validation_toolkit_core::Predicate;

/// Holds when both members of a pair are equal.
///
/// Typically used for "confirm password" style rules, where the input is
/// projected to a `(value, confirmation)` tuple.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairMatching;

impl<A: PartialEq> Predicate<(A, A)> for PairMatching {
    fn evaluate(&self, (first, second): &(A, A)) -> bool {
        first == second
    }
}
