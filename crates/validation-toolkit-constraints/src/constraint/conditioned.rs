//! Constraints gated by guard constraints.

use std::fmt;

use tracing::debug;
use validation_toolkit_core::{EvaluationResult, FnPredicate, Predicate};

use super::any::AnyConstraint;
use super::simple::SimpleConstraint;
use super::traits::Constraint;
use crate::set::evaluate_each;

/// A [`SimpleConstraint`] that is only evaluated once all of its guards pass.
///
/// Guards are evaluated in append order without short-circuiting. If any
/// guard fails, the guarded predicate is not evaluated at all and the first
/// failing guard's result is returned instead. Callers that need every
/// guard failure should evaluate the guards as a
/// [`ConstraintSet`](crate::ConstraintSet) themselves.
///
/// # Example
///
/// ```
/// use validation_toolkit_constraints::{ConditionedConstraint, Constraint, SimpleConstraint};
/// use validation_toolkit_core::EvaluationResult;
///
/// let mut email = ConditionedConstraint::from_fn(|s: &str| s.contains('@'), "invalid email");
/// email.append_condition(SimpleConstraint::from_fn(|s: &str| !s.is_empty(), "required"));
///
/// assert_eq!(email.evaluate(""), EvaluationResult::Invalid("required"));
/// assert_eq!(email.evaluate("not-an-email"), EvaluationResult::Invalid("invalid email"));
/// assert_eq!(email.evaluate("ada@example.com"), EvaluationResult::Valid);
/// ```
pub struct ConditionedConstraint<T: ?Sized, E, P> {
    base: SimpleConstraint<T, E, P>,
    conditions: Vec<AnyConstraint<T, E>>,
}

impl<T: ?Sized, E, P> ConditionedConstraint<T, E, P>
where
    P: Predicate<T>,
{
    /// Creates an unguarded constraint that reports `error` whenever `predicate` fails.
    pub fn new(predicate: P, error: E) -> Self {
        Self::from_constraint(SimpleConstraint::new(predicate, error))
    }

    /// Creates an unguarded constraint whose error is built from the failing input.
    pub fn with_error_builder<F>(predicate: P, builder: F) -> Self
    where
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        Self::from_constraint(SimpleConstraint::with_error_builder(predicate, builder))
    }

    /// Wraps an existing constraint with an empty guard list.
    pub fn from_constraint(base: SimpleConstraint<T, E, P>) -> Self {
        Self {
            base,
            conditions: Vec::new(),
        }
    }

    /// Appends a guard. Guards are evaluated in append order.
    pub fn append_condition<C>(&mut self, condition: C)
    where
        C: Constraint<T, E> + 'static,
    {
        self.conditions.push(condition.erase());
    }

    /// Appends several guards, preserving their order.
    pub fn append_conditions<I, C>(&mut self, conditions: I)
    where
        I: IntoIterator<Item = C>,
        C: Constraint<T, E> + 'static,
    {
        self.conditions
            .extend(conditions.into_iter().map(|condition| condition.erase()));
    }

    /// Builder form of [`append_condition`](Self::append_condition).
    pub fn with_condition<C>(mut self, condition: C) -> Self
    where
        C: Constraint<T, E> + 'static,
    {
        self.append_condition(condition);
        self
    }

    /// The number of guards that must pass before the predicate is evaluated.
    pub fn conditions_count(&self) -> usize {
        self.conditions.len()
    }

    /// Returns true if at least one guard was appended.
    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Returns the guarded constraint.
    pub fn base(&self) -> &SimpleConstraint<T, E, P> {
        &self.base
    }
}

impl<T: ?Sized, E, F> ConditionedConstraint<T, E, FnPredicate<F>>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    /// Creates an unguarded constraint from a closure predicate and a fixed error.
    pub fn from_fn(predicate: F, error: E) -> Self {
        Self::new(FnPredicate::new(predicate), error)
    }
}

impl<T: ?Sized, E, P> Constraint<T, E> for ConditionedConstraint<T, E, P>
where
    P: Predicate<T>,
    E: Clone + Send + Sync,
{
    fn evaluate(&self, input: &T) -> EvaluationResult<E> {
        if !self.has_conditions() {
            return self.base.evaluate(input);
        }

        let results = evaluate_each(&self.conditions, input);
        match results.into_iter().find(EvaluationResult::is_invalid) {
            None => self.base.evaluate(input),
            Some(rejection) => {
                debug!(event = "guard_rejected", guards = self.conditions.len());
                rejection
            }
        }
    }
}

impl<T: ?Sized, E: fmt::Debug, P> fmt::Debug for ConditionedConstraint<T, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionedConstraint")
            .field("base", &self.base)
            .field("conditions", &self.conditions.len())
            .finish()
    }
}
