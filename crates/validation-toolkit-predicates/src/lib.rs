//! Ready-made predicates for common validation rules.
//!
//! - **Strings**: [`RequiredString`], [`LengthPredicate`]
//! - **Numbers**: [`InRange`]
//! - **Patterns**: [`RegexPredicate`], [`EmailPredicate`]
//! - **Pairs**: [`PairMatching`] (e.g. password confirmation)
//!
//! Every predicate implements
//! [`Predicate`](validation_toolkit_core::Predicate) and can be bound to an
//! error with a constraint.
//!
//! # Example
//!
//! ```
//! use validation_toolkit_core::Predicate;
//! use validation_toolkit_predicates::{EmailPredicate, LengthPredicate};
//!
//! assert!(EmailPredicate::new().evaluate("ada@example.com"));
//!
//! let username = LengthPredicate::new(3, 16).unwrap();
//! assert!(username.evaluate("ada"));
//! assert!(!username.evaluate("al"));
//! ```

mod numeric;
mod pair;
mod pattern;
mod string;

pub use numeric::InRange;
pub use pair::PairMatching;
pub use pattern::{EmailPredicate, RegexPredicate};
pub use string::{LengthPredicate, RequiredString};
