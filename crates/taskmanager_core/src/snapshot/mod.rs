//! Whole-repository snapshot persistence.
//!
//! # Responsibility
//! - Encode/decode the full project/task graph as one self-describing blob.
//! - Save and load that blob at a file path without leaving partial writes.
//!
//! # Invariants
//! - Project and task order survive a round trip unchanged.
//! - A missing snapshot file is reported as `NotFound`, distinct from
//!   malformed or unsupported content.
//! - Decoding never re-validates project-name uniqueness.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod codec;
mod file;

pub use codec::{decode_snapshot, encode_snapshot, SNAPSHOT_FORMAT, SNAPSHOT_VERSION};
pub use file::{load_snapshot, save_snapshot};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    /// No snapshot file exists at the path yet.
    NotFound(PathBuf),
    /// Reading or writing the snapshot file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serializing the repository failed.
    Encode(serde_json::Error),
    /// Blob is not valid snapshot JSON or carries invalid records.
    Malformed(serde_json::Error),
    /// Blob is JSON but tagged with a foreign format identifier.
    UnsupportedFormat(String),
    /// Blob was written by an unknown snapshot version.
    UnsupportedVersion { found: u32, latest_supported: u32 },
}

impl SnapshotError {
    /// Returns whether this error only means "no data saved yet".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "snapshot_not_found",
            Self::Io { .. } => "snapshot_io_failed",
            Self::Encode(_) => "snapshot_encode_failed",
            Self::Malformed(_) => "snapshot_malformed",
            Self::UnsupportedFormat(_) => "snapshot_unsupported_format",
            Self::UnsupportedVersion { .. } => "snapshot_unsupported_version",
        }
    }
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "snapshot not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "snapshot i/o failed at `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Malformed(err) => write!(f, "malformed snapshot: {err}"),
            Self::UnsupportedFormat(format) => {
                write!(f, "unsupported snapshot format `{format}`")
            }
            Self::UnsupportedVersion {
                found,
                latest_supported,
            } => write!(
                f,
                "snapshot version {found} is not supported (latest supported {latest_supported})"
            ),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) | Self::Malformed(err) => Some(err),
            Self::NotFound(_) | Self::UnsupportedFormat(_) | Self::UnsupportedVersion { .. } => {
                None
            }
        }
    }
}
