//! In-memory project repository.
//!
//! # Responsibility
//! - Own every project in insertion order.
//! - Provide name-keyed create/find/remove operations for projects and
//!   their tasks.
//!
//! # Invariants
//! - No two projects share a `NameKey`, enforced on `add_project` only.
//!   `from_projects` (snapshot restore) accepts its input as-is.
//! - Not-found outcomes are `false`/`None`, never errors.
//! - "First match" always means earliest insertion order.

use crate::model::project::Project;
use crate::name_key::NameKey;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected `add_project` candidate whose name collides with an existing
/// project. The candidate is handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateProject {
    pub project: Project,
}

impl DuplicateProject {
    /// Returns the rejected project to the caller.
    pub fn into_project(self) -> Project {
        self.project
    }
}

impl Display for DuplicateProject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "a project named `{}` already exists",
            self.project.name()
        )
    }
}

impl Error for DuplicateProject {}

/// Owner of all projects for one process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRepository {
    projects: Vec<Project>,
}

impl ProjectRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a repository from already-ordered projects.
    ///
    /// Name uniqueness is not re-validated here; it is enforced again on the
    /// next `add_project`.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Appends `project` unless another project has the same name key.
    ///
    /// # Errors
    /// - `DuplicateProject` carrying the rejected candidate on collision.
    pub fn add_project(&mut self, project: Project) -> Result<(), DuplicateProject> {
        if self.position_by_key(project.name_key()).is_some() {
            debug!(
                "event=project_add module=repo status=rejected reason=duplicate_name project_count={}",
                self.projects.len()
            );
            return Err(DuplicateProject { project });
        }

        self.projects.push(project);
        debug!(
            "event=project_add module=repo status=ok project_count={}",
            self.projects.len()
        );
        Ok(())
    }

    /// Finds the project whose name key matches `name`.
    pub fn find_project_by_name(&self, name: &str) -> Option<&Project> {
        let key = NameKey::new(name);
        self.projects
            .iter()
            .find(|project| *project.name_key() == key)
    }

    /// Mutable variant of [`ProjectRepository::find_project_by_name`].
    pub fn find_project_by_name_mut(&mut self, name: &str) -> Option<&mut Project> {
        let key = NameKey::new(name);
        self.projects
            .iter_mut()
            .find(|project| *project.name_key() == key)
    }

    /// Removes the matching project together with all of its tasks.
    ///
    /// Returns `false` and leaves the repository unchanged when absent.
    pub fn remove_project(&mut self, name: &str) -> bool {
        let Some(index) = self.position_by_key(&NameKey::new(name)) else {
            debug!("event=project_remove module=repo status=not_found");
            return false;
        };

        let removed = self.projects.remove(index);
        debug!(
            "event=project_remove module=repo status=ok dropped_tasks={} project_count={}",
            removed.tasks().len(),
            self.projects.len()
        );
        true
    }

    /// Removes the first task matching `task_title` inside the matching
    /// project.
    ///
    /// Returns `false` when either the project or the task is absent.
    pub fn remove_task_from_project(&mut self, project_name: &str, task_title: &str) -> bool {
        let Some(project) = self.find_project_by_name_mut(project_name) else {
            debug!("event=task_remove module=repo status=project_not_found");
            return false;
        };

        match project.remove_task(task_title) {
            Some(_) => {
                debug!(
                    "event=task_remove module=repo status=ok task_count={}",
                    project.tasks().len()
                );
                true
            }
            None => {
                debug!("event=task_remove module=repo status=task_not_found");
                false
            }
        }
    }

    /// Marks the first task matching `task_title` as completed.
    ///
    /// Returns `false` when either the project or the task is absent.
    /// Completing an already completed task is a successful no-op.
    pub fn mark_task_completed(&mut self, project_name: &str, task_title: &str) -> bool {
        let Some(project) = self.find_project_by_name_mut(project_name) else {
            debug!("event=task_complete module=repo status=project_not_found");
            return false;
        };

        match project.find_task_mut(task_title) {
            Some(task) => {
                task.mark_completed();
                debug!("event=task_complete module=repo status=ok");
                true
            }
            None => {
                debug!("event=task_complete module=repo status=task_not_found");
                false
            }
        }
    }

    /// Read-only view of all projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn position_by_key(&self, key: &NameKey) -> Option<usize> {
        self.projects
            .iter()
            .position(|project| project.name_key() == key)
    }
}
