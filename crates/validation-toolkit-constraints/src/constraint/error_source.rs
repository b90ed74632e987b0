//! Lazily resolved constraint errors.

use std::fmt;

/// Produces the error bound to a constraint.
///
/// A fixed error is cloned on failure. A builder receives the failing input
/// and is only called once the predicate has failed.
pub enum ErrorSource<T: ?Sized, E> {
    /// The same error for every failing input.
    Fixed(E),
    /// An error computed from the failing input.
    Builder(Box<dyn Fn(&T) -> E + Send + Sync>),
}

impl<T: ?Sized, E> ErrorSource<T, E> {
    pub fn fixed(error: E) -> Self {
        Self::Fixed(error)
    }

    pub fn builder<F>(builder: F) -> Self
    where
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        Self::Builder(Box::new(builder))
    }

    /// Returns true if the error depends on the input.
    pub fn is_input_dependent(&self) -> bool {
        matches!(self, Self::Builder(_))
    }
}

impl<T: ?Sized, E: Clone> ErrorSource<T, E> {
    /// Materializes the error for a failing input.
    #[inline]
    pub fn resolve(&self, input: &T) -> E {
        match self {
            Self::Fixed(error) => error.clone(),
            Self::Builder(builder) => builder(input),
        }
    }
}

impl<T: ?Sized, E: fmt::Debug> fmt::Debug for ErrorSource<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(error) => f.debug_tuple("Fixed").field(error).finish(),
            Self::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}
