//! Regular-expression predicates.

use std::sync::OnceLock;

use regex::Regex;
use validation_toolkit_core::{Predicate, Result, ToolkitError};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Holds for strings that match a regular expression in full.
///
/// The pattern is anchored on both ends, so `"[0-9]+"` rejects `"12a"`.
///
/// # Example
///
/// ```
/// use validation_toolkit_core::Predicate;
/// use validation_toolkit_predicates::RegexPredicate;
///
/// let digits = RegexPredicate::new("[0-9]+").unwrap();
/// assert!(digits.evaluate("2024"));
/// assert!(!digits.evaluate("20x4"));
///
/// assert!(RegexPredicate::new("(").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegexPredicate {
    pattern: String,
    regex: Regex,
}

impl RegexPredicate {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|err| {
            ToolkitError::InvalidPattern {
                pattern: pattern.clone(),
                message: err.to_string(),
            }
        })?;
        Ok(Self { pattern, regex })
    }

    /// Returns the pattern as given, without the added anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Predicate<str> for RegexPredicate {
    fn evaluate(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl Predicate<String> for RegexPredicate {
    fn evaluate(&self, input: &String) -> bool {
        self.regex.is_match(input)
    }
}

/// Holds for strings shaped like an email address (`local@domain.tld`).
///
/// This is a syntactic check only; it does not resolve the domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailPredicate;

impl EmailPredicate {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate<str> for EmailPredicate {
    fn evaluate(&self, input: &str) -> bool {
        email_regex().is_match(input)
    }
}

impl Predicate<String> for EmailPredicate {
    fn evaluate(&self, input: &String) -> bool {
        email_regex().is_match(input)
    }
}
