//! Constraint types.
//!
//! A constraint links a [`Predicate`](validation_toolkit_core::Predicate) to
//! the error that describes why the predicate failed.

mod any;
mod conditioned;
mod error_source;
mod simple;
mod traits;


pub use any::AnyConstraint;
pub use conditioned::ConditionedConstraint;
pub use error_source::ErrorSource;
pub use simple::SimpleConstraint;
pub use traits::Constraint;
