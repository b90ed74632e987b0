//! Outcome types produced by rule evaluation.

use std::fmt;

/// Outcome of evaluating a single rule against an input.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::EvaluationResult;
///
/// let ok: EvaluationResult<&str> = EvaluationResult::Valid;
/// assert!(ok.is_valid());
/// assert_eq!(ok.error(), None);
///
/// let failed = EvaluationResult::Invalid("must be positive");
/// assert!(failed.is_invalid());
/// assert_eq!(failed.error(), Some(&"must be positive"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EvaluationResult<E> {
    /// The rule held for the input.
    Valid,
    /// The rule did not hold; carries the error bound to the rule.
    Invalid(E),
}

impl<E> EvaluationResult<E> {
    /// Returns true if the rule held.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns true if the rule did not hold.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the bound error, present iff the result is invalid.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Consumes the result and returns the bound error, if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Converts into a `Result`, so a failed rule can be propagated with `?`.
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(error) => Err(error),
        }
    }

    /// Maps the bound error, leaving `Valid` untouched.
    pub fn map_error<U, F>(self, f: F) -> EvaluationResult<U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Valid => EvaluationResult::Valid,
            Self::Invalid(error) => EvaluationResult::Invalid(f(error)),
        }
    }
}

impl<E> From<EvaluationResult<E>> for Result<(), E> {
    fn from(result: EvaluationResult<E>) -> Self {
        result.into_result()
    }
}

/// Ordered list of the errors produced by a rule set.
///
/// A summary with no errors means the input passed every evaluated rule.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::{EvaluationResult, Summary};
///
/// let results = vec![
///     EvaluationResult::Valid,
///     EvaluationResult::Invalid("too short"),
///     EvaluationResult::Invalid("missing digit"),
/// ];
/// let summary = Summary::from_results(results);
///
/// assert!(summary.is_invalid());
/// assert_eq!(summary.errors(), &["too short", "missing digit"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary<E> {
    errors: Vec<E>,
}

impl<E> Default for Summary<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Summary<E> {
    /// Creates an empty (passing) summary.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates a summary from already collected errors.
    pub fn from_errors(errors: Vec<E>) -> Self {
        Self { errors }
    }

    /// Collects the errors of the invalid results, preserving their order.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = EvaluationResult<E>>,
    {
        let errors = results
            .into_iter()
            .filter_map(EvaluationResult::into_error)
            .collect();
        Self { errors }
    }

    /// Returns true if no error was recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if at least one error was recorded.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    pub fn first(&self) -> Option<&E> {
        self.errors.first()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Keeps at most `max` errors, dropping the later ones.
    pub fn truncate(&mut self, max: usize) {
        self.errors.truncate(max);
    }

    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }
}

impl<E> FromIterator<EvaluationResult<E>> for Summary<E> {
    fn from_iter<I: IntoIterator<Item = EvaluationResult<E>>>(iter: I) -> Self {
        Self::from_results(iter)
    }
}

impl<E> IntoIterator for Summary<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<E: fmt::Display> fmt::Display for Summary<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            0 => write!(f, "validation passed"),
            1 => write!(f, "validation failed: {}", self.errors[0]),
            n => {
                write!(f, "validation failed with {} errors: ", n)?;
                for (i, error) in self.errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Summary<E> {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_evaluation_result_snake_case() {
        let valid: EvaluationResult<String> = EvaluationResult::Valid;
        let yaml = serde_yaml::to_string(&valid).unwrap();
        assert_eq!(yaml.trim(), "valid");

        let invalid = EvaluationResult::Invalid("too short".to_string());
        let yaml = serde_yaml::to_string(&invalid).unwrap();
        assert!(yaml.contains("invalid"));
        assert!(yaml.contains("too short"));
    }

    #[test]
    fn test_evaluation_result_round_trip() {
        for result in [
            EvaluationResult::Valid,
            EvaluationResult::Invalid("too short".to_string()),
        ] {
            let yaml = serde_yaml::to_string(&result).unwrap();
            let back: EvaluationResult<String> = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(back, result);
        }
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = Summary::from_errors(vec![
            "too short".to_string(),
            "missing digit".to_string(),
        ]);
        let yaml = serde_yaml::to_string(&summary).unwrap();
        assert!(yaml.starts_with("errors:"));

        let back: Summary<String> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, summary);

        let empty: Summary<String> = serde_yaml::from_str("errors: []").unwrap();
        assert!(empty.is_valid());
    }
}
