//! Validation Toolkit Core - result, predicate and error types
//!
//! This crate provides the fundamental abstractions for Validation Toolkit:
//! - [`EvaluationResult`] for the outcome of a single rule
//! - [`Summary`] for the failing errors of a whole rule set
//! - [`Predicate`] trait with closure wrappers and boolean composition
//! - [`ToolkitError`] for construction-time failures

pub mod error;
pub mod predicate;
pub mod result;

pub use error::{Result, ToolkitError};
pub use predicate::{
    AndPredicate, FnPredicate, NotPredicate, OrPredicate, Predicate, PredicateExt, TruePredicate,
};
pub use result::{EvaluationResult, Summary};
