//! Constraint evaluation engine for Validation Toolkit.
//!
//! This crate binds predicates to errors and evaluates them:
//! - [`SimpleConstraint`]: one predicate + one (possibly input-dependent) error
//! - [`ConditionedConstraint`]: a simple constraint gated by guard constraints
//! - [`ConstraintSet`]: ordered rules with fail-fast and accumulate evaluation,
//!   optionally gated by its own conditions
//!
//! # Architecture
//!
//! Predicates stay fully typed inside a constraint. Heterogeneous collections
//! (set members, guards, set conditions) hold [`AnyConstraint`], a boxed
//! [`Constraint`] trait object, so rules over different predicate types but
//! the same input can live side by side.
//!
//! # Example
//!
//! ```
//! use validation_toolkit_constraints::{ConstraintSet, SimpleConstraint};
//! use validation_toolkit_core::EvaluationResult;
//!
//! let mut set = ConstraintSet::new();
//! set.add(SimpleConstraint::from_fn(|x: &i32| x % 2 == 0, "must be even"));
//! set.add(SimpleConstraint::from_fn(|x: &i32| *x > 0, "must be positive"));
//!
//! assert_eq!(set.evaluate_any(&-4), EvaluationResult::Invalid("must be positive"));
//! assert_eq!(
//!     set.evaluate_all(&-4),
//!     vec![EvaluationResult::Valid, EvaluationResult::Invalid("must be positive")]
//! );
//! ```

pub mod constraint;
pub mod set;

pub use constraint::{
    AnyConstraint, ConditionedConstraint, Constraint, ErrorSource, SimpleConstraint,
};
pub use set::ConstraintSet;
