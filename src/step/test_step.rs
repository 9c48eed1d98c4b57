//! The eyesight test step record.

use serde::{Deserialize, Serialize};

use super::kind::{EyesightTestEye, EyesightTestMode};

/// Configuration of one eyesight test step.
///
/// A passive record: `mode` and `eye` are chosen when the task is assembled,
/// `score` is written by whatever presents the step once the user finishes
/// it. No validation happens on read or write, and nothing here can fail.
///
/// There is no `Default`: mode and eye must always be chosen explicitly.
/// A freshly built step has a score of `0`.
///
/// # Example
///
/// ```rust
/// use eyesight_step::{EyesightTestEye, EyesightTestMode, EyesightTestStep};
///
/// let mut step = EyesightTestStep::new(EyesightTestMode::ContrastAcuity, EyesightTestEye::Left);
/// assert_eq!(step.score(), 0);
///
/// step.set_score(85);
/// assert_eq!(step.score(), 85);
/// assert_eq!(step.eye(), EyesightTestEye::Left);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EyesightTestStep {
    mode: EyesightTestMode,
    eye: EyesightTestEye,
    #[serde(default)]
    score: i64,
}

impl EyesightTestStep {
    /// Create a step for the given mode and eye, unscored.
    #[inline]
    pub const fn new(mode: EyesightTestMode, eye: EyesightTestEye) -> Self {
        Self { mode, eye, score: 0 }
    }

    /// Which dimension the step measures.
    #[inline]
    pub const fn mode(&self) -> EyesightTestMode {
        self.mode
    }

    /// Change the measured dimension.
    #[inline]
    pub fn set_mode(&mut self, mode: EyesightTestMode) {
        self.mode = mode;
    }

    /// Which eye the step applies to.
    #[inline]
    pub const fn eye(&self) -> EyesightTestEye {
        self.eye
    }

    /// Change the eye under test.
    #[inline]
    pub fn set_eye(&mut self, eye: EyesightTestEye) {
        self.eye = eye;
    }

    /// Recorded outcome. `0` until something writes it.
    #[inline]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Record the outcome. Any value is accepted.
    #[inline]
    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }
}
