// Ordered constraint collection gated by optional conditions.
//
// Both evaluation modes first check the conditions gate. An empty gate is
// bypassed; a non-empty gate is evaluated in the same mode as the requested
// evaluation, and a failing gate returns its own result(s) without touching
// the main constraints.

use std::fmt;

use tracing::{debug, trace};
use validation_toolkit_core::{EvaluationResult, Predicate, Summary};

use crate::constraint::{AnyConstraint, Constraint, SimpleConstraint};

/// An ordered collection of constraints over the same input type.
///
/// Insertion order is evaluation order for both modes and the order of the
/// [`evaluate_all`](Self::evaluate_all) results.
///
/// # Example
///
/// ```
/// use validation_toolkit_constraints::{ConstraintSet, SimpleConstraint};
/// use validation_toolkit_core::EvaluationResult;
///
/// let mut set = ConstraintSet::new();
/// set.add(SimpleConstraint::from_fn(|n: &i32| *n < 100, "too large"));
///
/// // Only validate numbers that are not zero.
/// set.add_condition(SimpleConstraint::from_fn(|n: &i32| *n != 0, "zero is not allowed"));
///
/// assert_eq!(set.evaluate_all(&0), vec![EvaluationResult::Invalid("zero is not allowed")]);
/// assert_eq!(set.evaluate_all(&500), vec![EvaluationResult::Invalid("too large")]);
/// assert_eq!(set.evaluate_any(&5), EvaluationResult::Valid);
/// ```
pub struct ConstraintSet<T: ?Sized, E> {
    constraints: Vec<AnyConstraint<T, E>>,
    conditions: Vec<AnyConstraint<T, E>>,
}

impl<T: ?Sized, E> Default for ConstraintSet<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> ConstraintSet<T, E> {
    /// Creates an empty set with no conditions.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Creates a set populated with a predefined list of constraints.
    pub fn from_constraints(constraints: Vec<AnyConstraint<T, E>>) -> Self {
        Self {
            constraints,
            conditions: Vec::new(),
        }
    }

    /// Appends a constraint to the main rules.
    pub fn add<C>(&mut self, constraint: C)
    where
        C: Constraint<T, E> + 'static,
    {
        self.constraints.push(constraint.erase());
    }

    /// Binds `predicate` to `error` and appends the resulting constraint.
    pub fn add_predicate<P>(&mut self, predicate: P, error: E)
    where
        T: 'static,
        E: Clone + Send + Sync + 'static,
        P: Predicate<T> + 'static,
    {
        self.add(SimpleConstraint::new(predicate, error));
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_constraint<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<T, E> + 'static,
    {
        self.add(constraint);
        self
    }

    /// Appends a precondition to the gate.
    pub fn add_condition<C>(&mut self, condition: C)
    where
        C: Constraint<T, E> + 'static,
    {
        self.conditions.push(condition.erase());
    }

    /// Builder form of [`add_condition`](Self::add_condition).
    pub fn with_condition<C>(mut self, condition: C) -> Self
    where
        C: Constraint<T, E> + 'static,
    {
        self.add_condition(condition);
        self
    }

    /// Replaces the gate.
    pub fn set_conditions(&mut self, conditions: Vec<AnyConstraint<T, E>>) {
        self.conditions = conditions;
    }

    pub fn conditions(&self) -> &[AnyConstraint<T, E>] {
        &self.conditions
    }

    pub fn conditions_mut(&mut self) -> &mut Vec<AnyConstraint<T, E>> {
        &mut self.conditions
    }

    pub fn constraints(&self) -> &[AnyConstraint<T, E>] {
        &self.constraints
    }

    /// Returns the number of main constraints (conditions excluded).
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Evaluates the constraints in order until the first one fails.
    ///
    /// Returns that failure, or `Valid` if every constraint passes (an empty
    /// set is vacuously valid). A failing gate returns the first failing
    /// condition's result.
    pub fn evaluate_any(&self, input: &T) -> EvaluationResult<E> {
        if !self.conditions.is_empty() {
            let gate = first_failure(&self.conditions, input);
            if gate.is_invalid() {
                debug!(
                    event = "gate_rejected",
                    mode = "any",
                    conditions = self.conditions.len(),
                );
                return gate;
            }
        }

        first_failure(&self.constraints, input)
    }

    /// Evaluates every constraint in order and returns one result per constraint.
    ///
    /// A failing gate returns the full list of condition results in place of
    /// the main results.
    pub fn evaluate_all(&self, input: &T) -> Vec<EvaluationResult<E>> {
        if !self.conditions.is_empty() {
            let gate = evaluate_each(&self.conditions, input);
            if !all_valid(&gate) {
                debug!(
                    event = "gate_rejected",
                    mode = "all",
                    conditions = self.conditions.len(),
                );
                return gate;
            }
        }

        evaluate_each(&self.constraints, input)
    }

    /// Collects the failing errors of [`evaluate_all`](Self::evaluate_all), in order.
    pub fn summarize(&self, input: &T) -> Summary<E> {
        Summary::from_results(self.evaluate_all(input))
    }
}

/// A set nested inside another rule evaluates fail-fast.
impl<T: ?Sized, E> Constraint<T, E> for ConstraintSet<T, E> {
    fn evaluate(&self, input: &T) -> EvaluationResult<E> {
        self.evaluate_any(input)
    }
}

impl<T: ?Sized, E> FromIterator<AnyConstraint<T, E>> for ConstraintSet<T, E> {
    fn from_iter<I: IntoIterator<Item = AnyConstraint<T, E>>>(iter: I) -> Self {
        Self::from_constraints(iter.into_iter().collect())
    }
}

impl<T: ?Sized, E> Extend<AnyConstraint<T, E>> for ConstraintSet<T, E> {
    fn extend<I: IntoIterator<Item = AnyConstraint<T, E>>>(&mut self, iter: I) {
        self.constraints.extend(iter);
    }
}

impl<T: ?Sized, E> fmt::Debug for ConstraintSet<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("constraints", &self.constraints.len())
            .field("conditions", &self.conditions.len())
            .finish()
    }
}

// Fail-fast pass: stops at the first invalid result.
fn first_failure<T: ?Sized, E>(
    constraints: &[AnyConstraint<T, E>],
    input: &T,
) -> EvaluationResult<E> {
    for (index, constraint) in constraints.iter().enumerate() {
        let result = constraint.evaluate(input);
        trace!(
            event = "constraint_evaluated",
            mode = "any",
            index = index,
            valid = result.is_valid(),
        );
        if result.is_invalid() {
            return result;
        }
    }
    EvaluationResult::Valid
}

// Accumulating pass: one result per constraint, no short-circuit.
pub(crate) fn evaluate_each<T: ?Sized, E>(
    constraints: &[AnyConstraint<T, E>],
    input: &T,
) -> Vec<EvaluationResult<E>> {
    constraints
        .iter()
        .enumerate()
        .map(|(index, constraint)| {
            let result = constraint.evaluate(input);
            trace!(
                event = "constraint_evaluated",
                mode = "all",
                index = index,
                valid = result.is_valid(),
            );
            result
        })
        .collect()
}

fn all_valid<E>(results: &[EvaluationResult<E>]) -> bool {
    results.iter().all(EvaluationResult::is_valid)
}
