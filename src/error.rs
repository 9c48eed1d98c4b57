//! Error types for eyesight-step library.
//!
//! The step record itself never fails. These errors cover task configuration,
//! task assembly, and result rendering.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all eyesight-step operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Task assembly or step lookup error
    Task(TaskError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Task or step identifier is empty
    EmptyIdentifier,
    /// Raw mode constant outside the known range (0-1)
    InvalidMode(i64),
    /// Raw eye constant outside the known range (0-1)
    InvalidEye(i64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
    /// Failed to render a result as TOML (std only)
    #[cfg(feature = "std")]
    SerializeError(heapless::String<128>),
}

/// Task assembly and lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskError {
    /// No step with this identifier in the task
    StepNotFound(heapless::String<32>),
    /// Step identifier used twice in one task
    DuplicateStep(heapless::String<32>),
    /// Task already holds the maximum number of steps
    TooManySteps,
    /// Task has no steps
    Empty,
    /// Identifier is empty or too long
    InvalidIdentifier(heapless::String<64>),
    /// Title or text longer than its capacity
    TextTooLong {
        /// Which field overflowed
        field: &'static str,
        /// Maximum length in bytes
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Task(e) => write!(f, "Task error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::EmptyIdentifier => write!(f, "Identifier must not be empty"),
            ConfigError::InvalidMode(v) => {
                write!(f, "Invalid eyesight test mode: {}. Valid values: 0, 1", v)
            }
            ConfigError::InvalidEye(v) => {
                write!(f, "Invalid eyesight test eye: {}. Valid values: 0, 1", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::StepNotFound(name) => write!(f, "Step '{}' not found", name),
            TaskError::DuplicateStep(name) => write!(f, "Duplicate step identifier: '{}'", name),
            TaskError::TooManySteps => {
                write!(f, "Too many steps (max {})", crate::task::MAX_STEPS)
            }
            TaskError::Empty => write!(f, "Task has no steps"),
            TaskError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            TaskError::TextTooLong { field, limit } => {
                write!(f, "Step {} too long (max {} bytes)", field, limit)
            }
        }
    }
}

/// Copy as much of `msg` as fits into a bounded string.
pub(crate) fn truncated<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<TaskError> for Error {
    fn from(e: TaskError) -> Self {
        Error::Task(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for TaskError {}
