//! Task builder for programmatic task assembly.

use core::fmt::Write;

use heapless::String;

use super::registry::{EyesightTask, TaskStep};
use crate::error::{Error, Result, TaskError};
use crate::step::{EyesightTestEye, EyesightTestMode, EyesightTestStep};

/// Builder for an ordered eyesight task.
///
/// The first failure is kept and reported by [`TaskBuilder::build`]; later
/// calls are ignored once a step has been rejected.
///
/// # Example
///
/// ```rust
/// use eyesight_step::{EyesightTestEye, EyesightTestMode, TaskBuilder};
///
/// let task = TaskBuilder::new("eyesight")
///     .step("right_acuity", EyesightTestMode::VisualAcuity, EyesightTestEye::Right)
///     .step("left_acuity", EyesightTestMode::VisualAcuity, EyesightTestEye::Left)
///     .build()
///     .unwrap();
///
/// assert_eq!(task.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    task: Result<EyesightTask>,
}

impl TaskBuilder {
    /// Start a task with the given identifier.
    pub fn new(identifier: &str) -> Self {
        Self {
            task: EyesightTask::new(identifier),
        }
    }

    /// Standard battery: visual then contrast acuity, right eye before left.
    ///
    /// Step identifiers are `<mode>_<eye>`, e.g. `visual_acuity_right`.
    pub fn standard(identifier: &str) -> Self {
        let mut builder = Self::new(identifier);
        for mode in EyesightTestMode::ALL {
            for eye in EyesightTestEye::ALL {
                let mut name = String::<32>::new();
                // Longest is "contrast_acuity_right", well within capacity.
                let _ = write!(name, "{}_{}", mode, eye);

                let mut text = String::<128>::new();
                let _ = write!(text, "Cover your {} eye.", eye.other());

                builder = builder.titled_step(&name, mode, eye, standard_title(mode), &text);
            }
        }
        builder
    }

    /// Append an untitled step.
    pub fn step(self, identifier: &str, mode: EyesightTestMode, eye: EyesightTestEye) -> Self {
        self.push(identifier, TaskStep::new(EyesightTestStep::new(mode, eye)))
    }

    /// Append a step with title and instruction text. Empty strings are
    /// treated as absent.
    pub fn titled_step(
        self,
        identifier: &str,
        mode: EyesightTestMode,
        eye: EyesightTestEye,
        title: &str,
        text: &str,
    ) -> Self {
        let task = self.task.and_then(|mut task| {
            let entry = TaskStep {
                title: optional_text(title, "title")?,
                text: optional_text(text, "text")?,
                step: EyesightTestStep::new(mode, eye),
            };
            task.push(identifier, entry)?;
            Ok(task)
        });
        Self { task }
    }

    /// Build the task.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while adding steps, or `TaskError::Empty`
    /// if no step was added.
    pub fn build(self) -> Result<EyesightTask> {
        let task = self.task?;
        if task.is_empty() {
            return Err(Error::Task(TaskError::Empty));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "task {=str} built with {=usize} steps",
            task.identifier(),
            task.len()
        );

        Ok(task)
    }

    fn push(self, identifier: &str, step: TaskStep) -> Self {
        let task = self.task.and_then(|mut task| {
            task.push(identifier, step)?;
            Ok(task)
        });
        Self { task }
    }
}

fn standard_title(mode: EyesightTestMode) -> &'static str {
    match mode {
        EyesightTestMode::VisualAcuity => "Visual acuity",
        EyesightTestMode::ContrastAcuity => "Contrast acuity",
    }
}

fn optional_text<const N: usize>(value: &str, field: &'static str) -> Result<Option<String<N>>> {
    if value.is_empty() {
        return Ok(None);
    }

    String::try_from(value)
        .map(Some)
        .map_err(|_| Error::Task(TaskError::TextTooLong { field, limit: N }))
}
