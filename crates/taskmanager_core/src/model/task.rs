//! Task domain model.
//!
//! # Responsibility
//! - Hold one task's title, description and completion flag.
//!
//! # Invariants
//! - `title` is non-empty and immutable; `title_key` always equals
//!   `name_key(title)`.
//! - `description` is immutable; only `completed` changes in place.

use crate::model::ModelValidationError;
use crate::name_key::NameKey;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One titled task inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields")]
pub struct Task {
    title: String,
    description: String,
    completed: bool,
    #[serde(skip)]
    title_key: NameKey,
}

/// Wire shape accepted when decoding a task.
#[derive(Deserialize)]
struct TaskFields {
    title: String,
    description: String,
    completed: bool,
}

impl TryFrom<TaskFields> for Task {
    type Error = ModelValidationError;

    fn try_from(value: TaskFields) -> Result<Self, Self::Error> {
        let mut task = Self::new(value.title, value.description)?;
        task.completed = value.completed;
        Ok(task)
    }
}

impl Task {
    /// Creates a pending task.
    ///
    /// # Errors
    /// - `EmptyTaskTitle` when `title` is empty. Whitespace-only titles are
    ///   accepted; trimming user input is the caller's concern.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ModelValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ModelValidationError::EmptyTaskTitle);
        }
        let title_key = NameKey::new(&title);
        Ok(Self {
            title,
            description: description.into(),
            completed: false,
            title_key,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Comparison key used by title-keyed lookups.
    pub fn title_key(&self) -> &NameKey {
        &self.title_key
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn mark_completed(&mut self) {
        self.set_completed(true);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.completed {
            "[COMPLETED]"
        } else {
            "[PENDING]"
        };
        write!(f, "{status} {} - {}", self.title, self.description)
    }
}
