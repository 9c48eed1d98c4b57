//! Step configuration from TOML.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::step::{EyesightTestEye, EyesightTestMode, EyesightTestStep};

/// One step of a task, as described in configuration.
///
/// The step identifier is the table key in the enclosing task. Scores are
/// never configured, so unknown keys (including `score`) are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    /// Dimension the step measures.
    pub mode: EyesightTestMode,

    /// Eye under test.
    pub eye: EyesightTestEye,

    /// Optional short title shown with the step (max 64 chars).
    #[serde(default)]
    pub title: Option<String<64>>,

    /// Optional instruction text (max 128 chars).
    #[serde(default)]
    pub text: Option<String<128>>,
}

impl StepConfig {
    /// Create a step configuration without title or text.
    pub fn new(mode: EyesightTestMode, eye: EyesightTestEye) -> Self {
        Self {
            mode,
            eye,
            title: None,
            text: None,
        }
    }

    /// Build a fresh, unscored step record from this configuration.
    #[inline]
    pub fn to_step(&self) -> EyesightTestStep {
        EyesightTestStep::new(self.mode, self.eye)
    }
}
