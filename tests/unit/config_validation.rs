//! Unit tests for task configuration validation.

use eyesight_step::config::{validate_task, TaskConfig};
use eyesight_step::error::{ConfigError, Error, TaskError};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
identifier = "eyesight"

[steps.right_acuity]
mode = "visual_acuity"
eye = "right"
"#;

    let config: TaskConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_task(&config).is_ok());
}

/// Test validation fails for a blank task identifier.
#[test]
fn test_blank_task_identifier() {
    let toml_str = r#"
identifier = ""

[steps.right_acuity]
mode = "visual_acuity"
eye = "right"
"#;

    let config: TaskConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_task(&config),
        Err(Error::Config(ConfigError::EmptyIdentifier))
    );
}

/// Test validation fails for a blank step identifier.
#[test]
fn test_blank_step_identifier() {
    let toml_str = r#"
identifier = "eyesight"

[steps.""]
mode = "visual_acuity"
eye = "right"
"#;

    let config: TaskConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_task(&config),
        Err(Error::Config(ConfigError::EmptyIdentifier))
    );
}

/// Test that a task without steps is invalid.
#[test]
fn test_task_without_steps_invalid() {
    let config: TaskConfig =
        toml::from_str(r#"identifier = "eyesight""#).expect("Failed to parse TOML");
    assert_eq!(validate_task(&config), Err(Error::Task(TaskError::Empty)));
}

/// Test that the default configuration is invalid.
#[test]
fn test_default_config_is_invalid() {
    let config = TaskConfig::default();
    assert!(validate_task(&config).is_err());
}
