//! JSON snapshot document encoding.
//!
//! Document shape:
//! `{"format":"taskmanager.snapshot","version":1,"projects":[...]}` where each
//! project is `{"name":..,"tasks":[{"title":..,"description":..,"completed":..}]}`.

use super::{SnapshotError, SnapshotResult};
use crate::model::project::Project;
use crate::repo::project_repo::ProjectRepository;
use serde::{Deserialize, Serialize};

/// Format tag written into every snapshot document.
pub const SNAPSHOT_FORMAT: &str = "taskmanager.snapshot";
/// Latest (and only) snapshot document version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotDocumentRef<'a> {
    format: &'static str,
    version: u32,
    projects: &'a [Project],
}

/// Decoded document; `projects` stays untyped until the header is accepted.
#[derive(Deserialize)]
struct SnapshotDocument {
    format: String,
    version: u32,
    projects: serde_json::Value,
}

/// Serializes the whole repository into one snapshot blob.
///
/// # Errors
/// - `Encode` when JSON serialization fails.
pub fn encode_snapshot(repo: &ProjectRepository) -> SnapshotResult<Vec<u8>> {
    let document = SnapshotDocumentRef {
        format: SNAPSHOT_FORMAT,
        version: SNAPSHOT_VERSION,
        projects: repo.projects(),
    };
    serde_json::to_vec_pretty(&document).map_err(SnapshotError::Encode)
}

/// Rebuilds a repository from a snapshot blob.
///
/// Project-name uniqueness is taken as-is from the blob.
///
/// # Errors
/// - `Malformed` for invalid JSON, missing fields, or empty task titles.
/// - `UnsupportedFormat` when the format tag is foreign.
/// - `UnsupportedVersion` when the version is not `SNAPSHOT_VERSION`.
pub fn decode_snapshot(bytes: &[u8]) -> SnapshotResult<ProjectRepository> {
    let document: SnapshotDocument =
        serde_json::from_slice(bytes).map_err(SnapshotError::Malformed)?;
    if document.format != SNAPSHOT_FORMAT {
        return Err(SnapshotError::UnsupportedFormat(document.format));
    }
    if document.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: document.version,
            latest_supported: SNAPSHOT_VERSION,
        });
    }

    let projects: Vec<Project> =
        serde_json::from_value(document.projects).map_err(SnapshotError::Malformed)?;
    Ok(ProjectRepository::from_projects(projects))
}

#[cfg(test)]
mod tests {
    use super::{decode_snapshot, encode_snapshot, SNAPSHOT_FORMAT, SNAPSHOT_VERSION};
    use crate::model::project::Project;
    use crate::model::task::Task;
    use crate::repo::project_repo::ProjectRepository;
    use crate::snapshot::SnapshotError;

    #[test]
    fn encoded_document_carries_format_and_version() {
        let mut repo = ProjectRepository::new();
        let mut project = Project::new("Work");
        project.add_task(Task::new("Review", "PR #12").unwrap());
        repo.add_project(project).unwrap();

        let bytes = encode_snapshot(&repo).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["format"], SNAPSHOT_FORMAT);
        assert_eq!(json["version"], SNAPSHOT_VERSION);
        assert_eq!(json["projects"][0]["name"], "Work");
        assert_eq!(json["projects"][0]["tasks"][0]["title"], "Review");
        assert_eq!(json["projects"][0]["tasks"][0]["description"], "PR #12");
        assert_eq!(json["projects"][0]["tasks"][0]["completed"], false);
        assert!(json["projects"][0].get("name_key").is_none());
    }

    #[test]
    fn decode_rejects_foreign_format_before_reading_projects() {
        let blob = br#"{"format":"other.app","version":1,"projects":"nope"}"#;
        let err = decode_snapshot(blob).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsupportedFormat(ref f) if f == "other.app"));
    }

    #[test]
    fn decode_rejects_unknown_version_before_reading_projects() {
        let blob = br#"{"format":"taskmanager.snapshot","version":7,"projects":{"bad":true}}"#;
        let err = decode_snapshot(blob).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion {
                found: 7,
                latest_supported: SNAPSHOT_VERSION
            }
        ));
    }

    #[test]
    fn decode_rejects_wrongly_typed_project_list() {
        let blob = br#"{"format":"taskmanager.snapshot","version":1,"projects":"nope"}"#;
        let err = decode_snapshot(blob).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn decode_rejects_missing_header() {
        let err = decode_snapshot(br#"{"projects":[]}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn decode_defaults_missing_task_list_to_empty() {
        let blob = br#"{"format":"taskmanager.snapshot","version":1,"projects":[{"name":"Home"}]}"#;
        let repo = decode_snapshot(blob).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(repo.projects()[0].tasks().is_empty());
    }
}
