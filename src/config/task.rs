//! Task configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::{Deserialize, Serialize};

use super::step::StepConfig;
use crate::task::MAX_STEPS;

/// Root configuration structure from TOML.
///
/// Steps keep the order in which they appear in the file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskConfig {
    /// Task identifier.
    pub identifier: String<32>,

    /// Named step configurations, in presentation order.
    #[serde(default)]
    pub steps: FnvIndexMap<String<32>, StepConfig, MAX_STEPS>,
}

impl TaskConfig {
    /// Get a step configuration by identifier.
    pub fn step(&self, name: &str) -> Option<&StepConfig> {
        self.steps
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all step identifiers in order.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(|s| s.as_str())
    }
}
