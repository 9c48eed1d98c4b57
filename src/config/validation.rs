//! Configuration validation.

use crate::error::{ConfigError, Error, Result, TaskError};

use super::TaskConfig;

/// Validate a task configuration.
///
/// Checks:
/// - Task identifier is not empty
/// - Every step identifier is not empty
/// - The task has at least one step
pub fn validate_task(config: &TaskConfig) -> Result<()> {
    if config.identifier.trim().is_empty() {
        return Err(Error::Config(ConfigError::EmptyIdentifier));
    }

    for name in config.steps.keys() {
        validate_step_name(name.as_str())?;
    }

    if config.steps.is_empty() {
        return Err(Error::Task(TaskError::Empty));
    }

    Ok(())
}

fn validate_step_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Config(ConfigError::EmptyIdentifier));
    }

    Ok(())
}
