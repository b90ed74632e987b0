//! Validation Toolkit - composable validation rules in Rust
//!
//! Bind predicates to errors, gate them behind conditions, group them into
//! ordered sets and run them through a configured [`Validator`].
//!
//! # Example
//!
//! ```rust
//! use validation_toolkit::prelude::*;
//!
//! let rules: ConstraintSet<str, &str> = ConstraintSet::new()
//!     .with_constraint(SimpleConstraint::<str, _, _>::new(
//!         RequiredString::new(),
//!         "name is required",
//!     ))
//!     .with_constraint(SimpleConstraint::<str, _, _>::new(
//!         LengthPredicate::at_most(8),
//!         "name is too long",
//!     ));
//!
//! let validator = Validator::new(rules);
//!
//! assert!(validator.validate("ada").is_valid());
//! assert_eq!(
//!     validator.validate("").errors(),
//!     &["name is required"]
//! );
//! ```

// Result and predicate types
pub use validation_toolkit_core::{
    AndPredicate, EvaluationResult, FnPredicate, NotPredicate, OrPredicate, Predicate,
    PredicateExt, Result, Summary, ToolkitError, TruePredicate,
};

// Constraint engine
pub use validation_toolkit_constraints::{
    AnyConstraint, ConditionedConstraint, Constraint, ConstraintSet, ErrorSource,
    SimpleConstraint,
};

// Ready-made predicates
pub use validation_toolkit_predicates as predicates;

// Configuration
pub use validation_toolkit_config::{ConfigError, EvaluationMode, ValidatorConfig};

mod validator;
pub use validator::Validator;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        AnyConstraint, ConditionedConstraint, Constraint, ConstraintSet, SimpleConstraint,
    };
    pub use super::{EvaluationMode, Validator, ValidatorConfig};
    pub use super::{EvaluationResult, FnPredicate, Predicate, PredicateExt, Summary};
    pub use validation_toolkit_predicates::{
        EmailPredicate, InRange, LengthPredicate, PairMatching, RegexPredicate, RequiredString,
    };
}
