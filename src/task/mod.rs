//! Task module for eyesight-step.
//!
//! Provides ordered step storage, lookup, and building.

mod builder;
mod registry;

pub use builder::TaskBuilder;
pub use registry::{EyesightTask, TaskStep, MAX_STEPS};
