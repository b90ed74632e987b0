//! Tests for validator configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        mode = "fail_fast"
        max_reported_errors = 3
    "#;

    let config = ValidatorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.mode, EvaluationMode::FailFast);
    assert_eq!(config.max_reported_errors, Some(3));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        mode: accumulate
        max_reported_errors: 10
    "#;

    let config = ValidatorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.mode, EvaluationMode::Accumulate);
    assert_eq!(config.max_reported_errors, Some(10));
}

#[test]
fn test_defaults() {
    let config = ValidatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, ValidatorConfig::default());
    assert_eq!(config.mode, EvaluationMode::Accumulate);
    assert_eq!(config.max_reported_errors, None);
}

#[test]
fn test_builder() {
    let config = ValidatorConfig::new()
        .with_mode(EvaluationMode::FailFast)
        .with_max_reported_errors(2);

    assert_eq!(config.mode, EvaluationMode::FailFast);
    assert_eq!(config.max_reported_errors, Some(2));
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = ValidatorConfig::from_toml_str(r#"mode = "eventually""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_zero_max_reported_errors_is_rejected() {
    let err = ValidatorConfig::from_yaml_str("max_reported_errors: 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file() {
    let err = ValidatorConfig::load("does/not/exist/validator.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));

    let toolkit_err: ToolkitError = err.into();
    assert!(matches!(toolkit_err, ToolkitError::Config(_)));
}
