//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{truncated, ConfigError, Error, Result};

use super::TaskConfig;

/// Load a task configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use eyesight_step::load_task;
///
/// let config = load_task("eyesight.toml")?;
/// ```
pub fn load_task<P: AsRef<Path>>(path: P) -> Result<TaskConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_task(&content)
}

/// Parse a task configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_task(content: &str) -> Result<TaskConfig> {
    let config: TaskConfig = toml::from_str(content).map_err(|e| {
        let msg = truncated(e.message());
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_task(&config)?;

    Ok(config)
}
