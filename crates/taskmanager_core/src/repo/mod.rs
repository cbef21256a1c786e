//! Repository layer owning the in-memory project graph.
//!
//! # Responsibility
//! - Enforce project-name uniqueness under `NameKey`.
//! - Route every name/title comparison through the same key function.
//!
//! # Invariants
//! - Mutations go through repository/project methods only; queries hand out
//!   read-only views.

pub mod project_repo;
