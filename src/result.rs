//! Serializable snapshots of finished steps.
//!
//! The result recorder reads these instead of the live task, so a snapshot
//! stays stable while the task keeps running.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::step::{EyesightTestEye, EyesightTestMode, EyesightTestStep};
use crate::task::MAX_STEPS;

/// Outcome of one step, labelled with its mode and eye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Step identifier.
    pub identifier: String<32>,
    /// Dimension the step measured.
    pub mode: EyesightTestMode,
    /// Eye the step applied to.
    pub eye: EyesightTestEye,
    /// Recorded score.
    pub score: i64,
}

impl StepResult {
    /// Snapshot a step record.
    pub fn from_step(identifier: String<32>, step: &EyesightTestStep) -> Self {
        Self {
            identifier,
            mode: step.mode(),
            eye: step.eye(),
            score: step.score(),
        }
    }
}

/// Outcome of a whole task, steps in task order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Task identifier.
    pub identifier: String<32>,
    /// Per-step results.
    #[serde(default)]
    pub steps: Vec<StepResult, MAX_STEPS>,
}

impl TaskResult {
    /// Create an empty result for a task.
    pub fn new(identifier: String<32>) -> Self {
        Self {
            identifier,
            steps: Vec::new(),
        }
    }

    /// Get a step result by identifier.
    pub fn step(&self, identifier: &str) -> Option<&StepResult> {
        self.steps
            .iter()
            .find(|s| s.identifier.as_str() == identifier)
    }

    /// Sum of all step scores, saturating at the `i64` bounds.
    pub fn total_score(&self) -> i64 {
        self.steps
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.score))
    }

    /// Results for one eye, in task order.
    pub fn for_eye(&self, eye: EyesightTestEye) -> impl Iterator<Item = &StepResult> {
        self.steps.iter().filter(move |s| s.eye == eye)
    }
}

#[cfg(feature = "std")]
impl TaskResult {
    /// Render the result as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SerializeError` if rendering fails.
    pub fn to_toml(&self) -> crate::error::Result<std::string::String> {
        use crate::error::{ConfigError, Error};

        toml::to_string(self).map_err(|e| {
            let msg = crate::error::truncated(&e.to_string());
            Error::Config(ConfigError::SerializeError(msg))
        })
    }
}
