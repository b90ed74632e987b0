//! Numeric predicates.

use std::fmt::Display;

use validation_toolkit_core::{Predicate, Result, ToolkitError};

/// Holds for values in the inclusive range `min..=max`.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::Predicate;
/// use validation_toolkit_predicates::InRange;
///
/// let percentage = InRange::new(0, 100).unwrap();
/// assert!(percentage.evaluate(&75));
/// assert!(!percentage.evaluate(&101));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange<N> {
    min: N,
    max: N,
}

impl<N: PartialOrd + Display> InRange<N> {
    /// Creates an inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidRange`] if `min > max`.
    pub fn new(min: N, max: N) -> Result<Self> {
        if min > max {
            return Err(ToolkitError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }
}

impl<N> InRange<N> {
    pub fn min(&self) -> &N {
        &self.min
    }

    pub fn max(&self) -> &N {
        &self.max
    }
}

impl<N: PartialOrd + Send + Sync> Predicate<N> for InRange<N> {
    fn evaluate(&self, input: &N) -> bool {
        *input >= self.min && *input <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_inclusive() {
        let range = InRange::new(1, 10).unwrap();
        assert!(range.evaluate(&1));
        assert!(range.evaluate(&10));
        assert!(!range.evaluate(&0));
        assert!(!range.evaluate(&11));
    }

    #[test]
    fn test_in_range_floats() {
        let range = InRange::new(0.0, 1.0).unwrap();
        assert!(range.evaluate(&0.5));
        assert!(!range.evaluate(&f64::NAN));
    }

    #[test]
    fn test_in_range_rejects_inverted_bounds() {
        let err = InRange::new(10, 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid range: minimum 10 exceeds maximum 1");
    }
}
