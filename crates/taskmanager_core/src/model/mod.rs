//! Domain model for projects and their tasks.
//!
//! # Responsibility
//! - Define the project/task aggregate owned by the repository.
//! - Validate task titles at construction and on snapshot decode.
//!
//! # Invariants
//! - A project exclusively owns its tasks; tasks are never shared.
//! - Project names and task titles are immutable after creation.
//! - Name/title keys are computed once with `name_key` and never drift.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project;
pub mod task;

/// Validation failures for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Task title has no characters.
    EmptyTaskTitle,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for ModelValidationError {}
