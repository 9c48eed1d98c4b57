//! Configuration module for eyesight-step.
//!
//! Provides types for loading and validating task configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod step;
mod task;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use step::StepConfig;
pub use task::TaskConfig;
pub use validation::validate_task;

#[cfg(feature = "std")]
pub use loader::{load_task, parse_task};
