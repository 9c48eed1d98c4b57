//! Step module for eyesight-step.
//!
//! Provides the step record and its mode/eye enumerations.

pub mod kind;
mod test_step;

pub use kind::{EyesightTestEye, EyesightTestMode};
pub use test_step::EyesightTestStep;
