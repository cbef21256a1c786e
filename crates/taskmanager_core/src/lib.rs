//! Core domain logic for the task manager.
//! This crate is the single source of truth for project/task invariants.

pub mod logging;
pub mod model;
pub mod name_key;
pub mod repo;
pub mod snapshot;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::Project;
pub use model::task::Task;
pub use model::ModelValidationError;
pub use name_key::{name_key, NameKey};
pub use repo::project_repo::{DuplicateProject, ProjectRepository};
pub use snapshot::{
    decode_snapshot, encode_snapshot, load_snapshot, save_snapshot, SnapshotError,
    SnapshotResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
