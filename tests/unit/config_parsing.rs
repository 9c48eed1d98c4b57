//! Unit tests for TOML task parsing.

use eyesight_step::config::{parse_task, TaskConfig};
use eyesight_step::error::{ConfigError, Error};
use eyesight_step::task::MAX_STEPS;
use eyesight_step::{EyesightTask, EyesightTestEye, EyesightTestMode};

/// Build a task document with `count` visual acuity steps.
fn task_with_steps(count: usize) -> String {
    let mut toml_str = String::from("identifier = \"eyesight\"\n");
    for index in 0..count {
        toml_str.push_str(&format!(
            "\n[steps.step_{index}]\nmode = \"visual_acuity\"\neye = \"right\"\n"
        ));
    }
    toml_str
}

/// Test parsing a task with titled and untitled steps.
#[test]
fn test_parse_task_config() {
    let toml_str = r#"
identifier = "eyesight"

[steps.right_acuity]
mode = "visual_acuity"
eye = "right"
title = "Visual acuity"
text = "Cover your left eye."

[steps.left_contrast]
mode = "contrast_acuity"
eye = "left"
"#;

    let config: TaskConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.identifier.as_str(), "eyesight");
    assert_eq!(config.steps.len(), 2);

    let step = config.step("right_acuity").expect("Step not found");
    assert_eq!(step.mode, EyesightTestMode::VisualAcuity);
    assert_eq!(step.eye, EyesightTestEye::Right);
    assert_eq!(step.title.as_deref(), Some("Visual acuity"));

    let step = config.step("left_contrast").expect("Step not found");
    assert_eq!(step.mode, EyesightTestMode::ContrastAcuity);
    assert_eq!(step.eye, EyesightTestEye::Left);
    assert!(step.text.is_none());
}

/// Test that a configured score is rejected: scores come from execution only.
#[test]
fn test_score_in_config_rejected() {
    let toml_str = r#"
identifier = "eyesight"

[steps.right_acuity]
mode = "visual_acuity"
eye = "right"
score = 85
"#;

    let result: Result<TaskConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject score in step config");
}

/// Test that unknown modes are rejected during parsing.
#[test]
fn test_invalid_mode_rejected() {
    let toml_str = r#"
identifier = "eyesight"

[steps.right]
mode = "color_vision"
eye = "right"
"#;

    let result: Result<TaskConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown mode");
}

/// Test that mode and eye are required.
#[test]
fn test_missing_eye_rejected() {
    let toml_str = r#"
identifier = "eyesight"

[steps.right]
mode = "visual_acuity"
"#;

    assert!(parse_task(toml_str).is_err());
}

/// Test that an overlong title is rejected during parsing.
#[test]
fn test_overlong_title_rejected() {
    let toml_str = format!(
        r#"
identifier = "eyesight"

[steps.right]
mode = "visual_acuity"
eye = "right"
title = "{}"
"#,
        "t".repeat(65)
    );

    let result: Result<TaskConfig, _> = toml::from_str(&toml_str);
    assert!(result.is_err(), "Should reject title over 64 chars");
}

/// Test that a task at full capacity parses and builds.
#[test]
fn test_full_task_parses() {
    let config = parse_task(&task_with_steps(MAX_STEPS)).expect("Full task should parse");
    assert_eq!(config.steps.len(), MAX_STEPS);

    let task = EyesightTask::from_config(&config).expect("Full task should build");
    assert_eq!(task.len(), MAX_STEPS);
    assert_eq!(task.step_at(MAX_STEPS - 1).unwrap().0, "step_15");
}

/// Test that one step past capacity is a parse error.
#[test]
fn test_too_many_steps_rejected() {
    let result = parse_task(&task_with_steps(MAX_STEPS + 1));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}
