//! Shared test fixtures for Validation Toolkit crates.
//!
//! This crate provides stubs and data types for testing.
//! It does NOT depend on `validation-toolkit-constraints` to avoid circular dependencies.
//!
//! - [`counting`] - call-counting predicate and error-builder stubs
//! - [`error`] - a small error enum used as the bound error value
//! - [`form`] - a sign-up form input with ready-made field predicates
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! validation-toolkit-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use validation_toolkit_test::{CallCounter, CountingPredicate, TestError};
//! ```

pub mod counting;
pub mod error;
pub mod form;

pub use counting::{counting_error_builder, CallCounter, CountingPredicate};
pub use error::TestError;
pub use form::SignupForm;
