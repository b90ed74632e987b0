//! String predicates.

use validation_toolkit_core::{Predicate, Result, ToolkitError};

/// Holds for strings that are not empty.
///
/// By default surrounding whitespace is ignored, so `"   "` is treated as
/// missing.
#[derive(Debug, Clone, Copy)]
pub struct RequiredString {
    trim: bool,
}

impl Default for RequiredString {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredString {
    pub fn new() -> Self {
        Self { trim: true }
    }

    /// Counts whitespace-only strings as present.
    pub fn untrimmed() -> Self {
        Self { trim: false }
    }
}

impl Predicate<str> for RequiredString {
    fn evaluate(&self, input: &str) -> bool {
        if self.trim {
            !input.trim().is_empty()
        } else {
            !input.is_empty()
        }
    }
}

impl Predicate<String> for RequiredString {
    fn evaluate(&self, input: &String) -> bool {
        Predicate::<str>::evaluate(self, input)
    }
}

/// Holds for strings whose character count lies in `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPredicate {
    min: usize,
    max: usize,
}

impl LengthPredicate {
    /// Creates an inclusive length range.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidRange`] if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(ToolkitError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn at_least(min: usize) -> Self {
        Self {
            min,
            max: usize::MAX,
        }
    }

    pub fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate<str> for LengthPredicate {
    fn evaluate(&self, input: &str) -> bool {
        let len = input.chars().count();
        len >= self.min && len <= self.max
    }
}

impl Predicate<String> for LengthPredicate {
    fn evaluate(&self, input: &String) -> bool {
        Predicate::<str>::evaluate(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let required = RequiredString::new();
        assert!(required.evaluate("hello"));
        assert!(!required.evaluate(""));
        assert!(!required.evaluate("  \t"));
        assert!(required.evaluate(&"x".to_string()));
    }

    #[test]
    fn test_required_string_untrimmed() {
        let required = RequiredString::untrimmed();
        assert!(required.evaluate("  "));
        assert!(!required.evaluate(""));
    }

    #[test]
    fn test_length_counts_chars() {
        let length = LengthPredicate::new(2, 4).unwrap();
        assert!(length.evaluate("ab"));
        assert!(length.evaluate("äöü"));
        assert!(!length.evaluate("a"));
        assert!(!length.evaluate("abcde"));
    }

    #[test]
    fn test_length_open_bounds() {
        assert!(LengthPredicate::at_least(3).evaluate("abcdefgh"));
        assert!(!LengthPredicate::at_least(3).evaluate("ab"));
        assert!(LengthPredicate::at_most(2).evaluate(""));
        assert!(!LengthPredicate::at_most(2).evaluate("abc"));
    }

    #[test]
    fn test_length_rejects_inverted_range() {
        let err = LengthPredicate::new(5, 1).unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidRange { .. }));
    }
}
