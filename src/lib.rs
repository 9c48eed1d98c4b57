//! # eyesight-step
//!
//! Configuration-driven eyesight test step model for clinical research tasks.
//!
//! ## Features
//!
//! - **Plain step record**: mode, eye and score with simple get/set access
//! - **Closed enums**: visual vs. contrast acuity, right vs. left eye
//! - **Configuration-driven**: Define ordered tasks in TOML files
//! - **no_std compatible**: Core library works without standard library
//! - **Result snapshots**: Serializable per-step and per-task results
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eyesight_step::{EyesightTask, TaskBuilder};
//!
//! // Load a task from TOML
//! let config = eyesight_step::load_task("eyesight.toml")?;
//! let mut task = EyesightTask::from_config(&config)?;
//!
//! // Or use the standard four-step battery
//! let mut task = TaskBuilder::standard("eyesight").build()?;
//!
//! // Presentation layer writes scores as steps finish
//! task.record_score("visual_acuity_right", 85)?;
//!
//! // Result recorder takes a snapshot
//! let toml = task.result().to_toml()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod result;
pub mod step;
pub mod task;

// Re-exports for ergonomic API
pub use config::{validate_task, StepConfig, TaskConfig};
pub use error::{Error, Result};
pub use result::{StepResult, TaskResult};
pub use step::{EyesightTestEye, EyesightTestMode, EyesightTestStep};
pub use task::{EyesightTask, TaskBuilder, TaskStep};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_task, parse_task};
