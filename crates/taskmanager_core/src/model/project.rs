//! Project aggregate.
//!
//! # Responsibility
//! - Own an ordered task list under one immutable project name.
//! - Provide title-keyed task lookup and read-only filtered views.
//!
//! # Invariants
//! - Tasks keep insertion order; removal preserves relative order.
//! - Duplicate task titles are allowed; title-keyed operations resolve to
//!   the earliest inserted match.

use crate::model::task::Task;
use crate::name_key::NameKey;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named project exclusively owning its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProjectFields")]
pub struct Project {
    name: String,
    tasks: Vec<Task>,
    #[serde(skip)]
    name_key: NameKey,
}

/// Wire shape accepted when decoding a project.
#[derive(Deserialize)]
struct ProjectFields {
    name: String,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl From<ProjectFields> for Project {
    fn from(value: ProjectFields) -> Self {
        let mut project = Self::new(value.name);
        project.tasks = value.tasks;
        project
    }
}

impl Project {
    /// Creates a project with no tasks. Any display string is a valid name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name_key = NameKey::new(&name);
        Self {
            name,
            tasks: Vec::new(),
            name_key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comparison key used for project-name uniqueness and lookup.
    pub fn name_key(&self) -> &NameKey {
        &self.name_key
    }

    /// Appends a task. No uniqueness check is applied.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Read-only view of all tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet completed, in original relative order.
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.is_completed()).collect()
    }

    /// Completed tasks, in original relative order.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_completed()).collect()
    }

    /// Returns the first task whose title key matches `title`.
    pub fn find_task(&self, title: &str) -> Option<&Task> {
        let key = NameKey::new(title);
        self.tasks.iter().find(|task| *task.title_key() == key)
    }

    /// Mutable variant of [`Project::find_task`].
    pub fn find_task_mut(&mut self, title: &str) -> Option<&mut Task> {
        let key = NameKey::new(title);
        self.tasks.iter_mut().find(|task| *task.title_key() == key)
    }

    /// Removes and returns the first task whose title key matches `title`.
    pub fn remove_task(&mut self, title: &str) -> Option<Task> {
        let key = NameKey::new(title);
        let index = self
            .tasks
            .iter()
            .position(|task| *task.title_key() == key)?;
        Some(self.tasks.remove(index))
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} tasks", self.name, self.tasks.len())
    }
}
