//! Predicate capability, closure wrappers and boolean composition.
//!
//! Predicates are composed at compile time using nested generic types;
//! dynamic dispatch is only introduced where a caller boxes them.

mod composition;
mod traits;
mod wrappers;

pub use composition::{AndPredicate, NotPredicate, OrPredicate, PredicateExt};
pub use traits::Predicate;
pub use wrappers::{FnPredicate, TruePredicate};
