//! Configuration system for Validation Toolkit.
//!
//! Load validator settings from TOML or YAML to choose the evaluation mode
//! and how many errors are reported, without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use validation_toolkit_config::{EvaluationMode, ValidatorConfig};
//!
//! let config = ValidatorConfig::from_toml_str(r#"
//!     mode = "fail_fast"
//!     max_reported_errors = 5
//! "#).unwrap();
//!
//! assert_eq!(config.mode, EvaluationMode::FailFast);
//! assert_eq!(config.max_reported_errors, Some(5));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use validation_toolkit_config::ValidatorConfig;
//!
//! let config = ValidatorConfig::load("validator.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validation_toolkit_core::ToolkitError;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ToolkitError {
    fn from(err: ConfigError) -> Self {
        ToolkitError::Config(err.to_string())
    }
}

/// How a rule set is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Stop at the first failing rule and report only its error.
    FailFast,

    /// Evaluate every rule and report every failing error in order.
    #[default]
    Accumulate,
}

/// Main validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ValidatorConfig {
    /// Evaluation mode.
    #[serde(default)]
    pub mode: EvaluationMode,

    /// Upper bound on the number of errors kept in a report.
    #[serde(default)]
    pub max_reported_errors: Option<usize>,
}

impl ValidatorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Caps the number of reported errors.
    pub fn with_max_reported_errors(mut self, max: usize) -> Self {
        self.max_reported_errors = Some(max);
        self
    }

    /// Checks settings that the type system cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `max_reported_errors` is zero,
    /// which would hide every failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_reported_errors == Some(0) {
            return Err(ConfigError::Invalid(
                "max_reported_errors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
