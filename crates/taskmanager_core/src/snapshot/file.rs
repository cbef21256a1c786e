//! Snapshot file save/load.
//!
//! # Invariants
//! - Saves encode fully in memory, write a sibling temp file, fsync it and
//!   rename it over the target. The target is either the old or the new
//!   snapshot, never a partial one.
//! - File handles are scoped to each call and closed on every exit path.

use super::codec::{decode_snapshot, encode_snapshot};
use super::{SnapshotError, SnapshotResult};
use crate::repo::project_repo::ProjectRepository;
use log::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Persists the whole repository at `path`.
///
/// Missing parent directories are created.
///
/// # Side effects
/// - Replaces the file at `path` atomically.
/// - Emits `snapshot_save` logging events with duration and status.
///
/// # Errors
/// - `Encode` when serialization fails.
/// - `Io` when any file-system step fails; the previous file is untouched.
pub fn save_snapshot(repo: &ProjectRepository, path: impl AsRef<Path>) -> SnapshotResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=snapshot_save module=snapshot status=start");

    let result = encode_snapshot(repo).and_then(|bytes| {
        write_atomically(path, &bytes).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })
    });

    match &result {
        Ok(()) => info!(
            "event=snapshot_save module=snapshot status=ok duration_ms={} project_count={}",
            started_at.elapsed().as_millis(),
            repo.len()
        ),
        Err(err) => error!(
            "event=snapshot_save module=snapshot status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    result
}

/// Restores a repository from the snapshot file at `path`.
///
/// # Side effects
/// - Emits `snapshot_load` logging events with duration and status.
///
/// # Errors
/// - `NotFound` when no file exists at `path`.
/// - `Io` for other read failures.
/// - `Malformed`, `UnsupportedFormat`, `UnsupportedVersion` for bad content.
pub fn load_snapshot(path: impl AsRef<Path>) -> SnapshotResult<ProjectRepository> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=snapshot_load module=snapshot status=start");

    let result = fs::read(path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SnapshotError::NotFound(path.to_path_buf())
            } else {
                SnapshotError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
        .and_then(|bytes| decode_snapshot(&bytes));

    match &result {
        Ok(repo) => info!(
            "event=snapshot_load module=snapshot status=ok duration_ms={} project_count={}",
            started_at.elapsed().as_millis(),
            repo.len()
        ),
        Err(err) if err.is_not_found() => info!(
            "event=snapshot_load module=snapshot status=missing duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=snapshot_load module=snapshot status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    result
}

fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);
    let written = write_and_sync(&temp_path, bytes).and_then(|()| fs::rename(&temp_path, path));
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "snapshot".into(), |name| name.to_string_lossy());
    path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()))
}
