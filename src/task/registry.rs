//! Ordered step container for one eyesight task.

use heapless::{FnvIndexMap, String};

use crate::config::TaskConfig;
use crate::error::{truncated, Error, Result, TaskError};
use crate::result::{StepResult, TaskResult};
use crate::step::EyesightTestStep;

/// Maximum number of steps in a task.
pub const MAX_STEPS: usize = 16;

/// A step as placed in a task: the record plus its presentation text.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStep {
    /// Optional short title (max 64 chars).
    pub title: Option<String<64>>,
    /// Optional instruction text (max 128 chars).
    pub text: Option<String<128>>,
    /// The step record.
    pub step: EyesightTestStep,
}

impl TaskStep {
    /// Wrap a record without title or text.
    pub fn new(step: EyesightTestStep) -> Self {
        Self {
            title: None,
            text: None,
            step,
        }
    }
}

/// Ordered, identifier-addressed collection of eyesight test steps.
///
/// Owns its step records. Steps keep insertion order, and identifiers are
/// unique. Scores are written through [`EyesightTask::record_score`] or
/// [`EyesightTask::get_mut`].
#[derive(Debug, Clone)]
pub struct EyesightTask {
    identifier: String<32>,
    steps: FnvIndexMap<String<32>, TaskStep, MAX_STEPS>,
}

impl EyesightTask {
    /// Create an empty task.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or longer than 32 chars.
    pub fn new(identifier: &str) -> Result<Self> {
        Ok(Self {
            identifier: identifier_string(identifier)?,
            steps: FnvIndexMap::new(),
        })
    }

    /// Build a task from a validated configuration. All steps start unscored.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no steps or a blank identifier.
    pub fn from_config(config: &TaskConfig) -> Result<Self> {
        crate::config::validate_task(config)?;

        let mut task = Self::new(config.identifier.as_str())?;
        for (name, step_config) in config.steps.iter() {
            task.push(
                name.as_str(),
                TaskStep {
                    title: step_config.title.clone(),
                    text: step_config.text.clone(),
                    step: step_config.to_step(),
                },
            )?;
        }
        Ok(task)
    }

    /// Task identifier.
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    /// Append a step at the end of the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is invalid or already used, or if
    /// the task is full.
    pub fn push(&mut self, identifier: &str, step: TaskStep) -> Result<()> {
        let name = identifier_string(identifier)?;

        if self.steps.contains_key(&name) {
            return Err(Error::Task(TaskError::DuplicateStep(name)));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "task {=str}: add step {=str} ({}, {})",
            self.identifier.as_str(),
            identifier,
            step.step.mode(),
            step.step.eye()
        );

        self.steps
            .insert(name, step)
            .map_err(|_| Error::Task(TaskError::TooManySteps))?;

        Ok(())
    }

    /// Get a step by identifier.
    pub fn get(&self, identifier: &str) -> Option<&TaskStep> {
        let name = String::<32>::try_from(identifier).ok()?;
        self.steps.get(&name)
    }

    /// Get a step by identifier for modification.
    pub fn get_mut(&mut self, identifier: &str) -> Option<&mut TaskStep> {
        let name = String::<32>::try_from(identifier).ok()?;
        self.steps.get_mut(&name)
    }

    /// Check if a step exists.
    pub fn contains(&self, identifier: &str) -> bool {
        if let Ok(name) = String::<32>::try_from(identifier) {
            self.steps.contains_key(&name)
        } else {
            false
        }
    }

    /// Get the step at a position in task order.
    pub fn step_at(&self, index: usize) -> Option<(&str, &TaskStep)> {
        self.iter().nth(index)
    }

    /// Record the outcome of a finished step.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::StepNotFound` if no step has this identifier. The
    /// task is left untouched in that case.
    pub fn record_score(&mut self, identifier: &str, score: i64) -> Result<()> {
        match self.get_mut(identifier) {
            Some(entry) => {
                entry.step.set_score(score);

                #[cfg(feature = "defmt")]
                defmt::debug!("step {=str}: score {=i64}", identifier, score);

                Ok(())
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("score for unknown step {=str} dropped", identifier);

                Err(Error::Task(TaskError::StepNotFound(truncated(identifier))))
            }
        }
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the task has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get an iterator over step identifiers in task order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(|s| s.as_str())
    }

    /// Get an iterator over steps in task order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaskStep)> {
        self.steps.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Snapshot the current scores for the result recorder.
    pub fn result(&self) -> TaskResult {
        let mut result = TaskResult::new(self.identifier.clone());
        for (name, entry) in self.steps.iter() {
            // Same capacity as the task, cannot overflow.
            let _ = result
                .steps
                .push(StepResult::from_step(name.clone(), &entry.step));
        }
        result
    }
}

fn identifier_string(identifier: &str) -> Result<String<32>> {
    if identifier.trim().is_empty() {
        return Err(Error::Task(TaskError::InvalidIdentifier(
            String::try_from("identifier is empty").unwrap_or_default(),
        )));
    }

    String::try_from(identifier).map_err(|_| {
        Error::Task(TaskError::InvalidIdentifier(
            String::try_from("identifier too long").unwrap_or_default(),
        ))
    })
}
