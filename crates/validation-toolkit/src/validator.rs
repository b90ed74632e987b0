//! Configured entry point that runs a rule set and reports its errors.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};
use validation_toolkit_config::{EvaluationMode, ValidatorConfig};
use validation_toolkit_constraints::ConstraintSet;
use validation_toolkit_core::{Result, Summary};

/// Runs a [`ConstraintSet`] under a [`ValidatorConfig`].
///
/// The mode decides between fail-fast evaluation (at most one error) and
/// accumulating every error in rule order. `max_reported_errors` caps the
/// accumulated report.
///
/// # Example
///
/// ```
/// use validation_toolkit::prelude::*;
///
/// let rules = ConstraintSet::new()
///     .with_constraint(SimpleConstraint::from_fn(|n: &i32| n % 2 == 0, "odd"))
///     .with_constraint(SimpleConstraint::from_fn(|n: &i32| *n > 0, "not positive"));
///
/// let accumulate = Validator::new(rules);
/// assert_eq!(accumulate.validate(&-3).errors(), &["odd", "not positive"]);
/// ```
pub struct Validator<T: ?Sized, E> {
    rules: ConstraintSet<T, E>,
    config: ValidatorConfig,
}

impl<T: ?Sized, E> Validator<T, E> {
    /// Creates a validator with the default configuration.
    pub fn new(rules: ConstraintSet<T, E>) -> Self {
        Self::build(rules, ValidatorConfig::default())
    }

    /// Creates a validator with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::Config`](crate::ToolkitError::Config) if the
    /// configuration is rejected by [`ValidatorConfig::validate`].
    pub fn with_config(rules: ConstraintSet<T, E>, config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(rules, config))
    }

    /// Creates a validator configured from a TOML file.
    pub fn from_config_file(rules: ConstraintSet<T, E>, path: impl AsRef<Path>) -> Result<Self> {
        let config = ValidatorConfig::load(path)?;
        Ok(Self::build(rules, config))
    }

    fn build(rules: ConstraintSet<T, E>, config: ValidatorConfig) -> Self {
        info!(
            event = "validator_created",
            mode = ?config.mode,
            constraints = rules.len(),
            conditions = rules.conditions().len(),
            max_reported_errors = ?config.max_reported_errors,
        );
        Self { rules, config }
    }

    pub fn rules(&self) -> &ConstraintSet<T, E> {
        &self.rules
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Evaluates the rules and collects the errors of the failing ones.
    pub fn validate(&self, input: &T) -> Summary<E> {
        let mut summary = match self.config.mode {
            EvaluationMode::FailFast => {
                Summary::from_results(std::iter::once(self.rules.evaluate_any(input)))
            }
            EvaluationMode::Accumulate => self.rules.summarize(input),
        };

        let found = summary.len();
        if let Some(max) = self.config.max_reported_errors {
            summary.truncate(max);
        }

        debug!(
            event = "validation_finished",
            mode = ?self.config.mode,
            valid = summary.is_valid(),
            errors = found,
            reported = summary.len(),
        );
        summary
    }

    /// Like [`validate`](Self::validate), but as a `Result` for use with `?`.
    pub fn check(&self, input: &T) -> std::result::Result<(), Summary<E>> {
        let summary = self.validate(input);
        if summary.is_valid() {
            Ok(())
        } else {
            Err(summary)
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for Validator<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field("config", &self.config)
            .finish()
    }
}
