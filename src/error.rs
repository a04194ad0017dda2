use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while synchronizing sources against the snapshot.
///
/// Per-file variants (`ParseFailure`, `InvalidSourceFormat`, `Serialize`, `Io`) only
/// affect the file they name. Snapshot variants abort the run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to parse {}: {reason}", .path.display())]
    ParseFailure { path: PathBuf, reason: String },

    #[error("invalid front matter in {}: expected a block delimited by `---` lines", .path.display())]
    InvalidSourceFormat { path: PathBuf },

    #[error("failed to serialize metadata for {}: {reason}", .path.display())]
    Serialize { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read snapshot {}: {source}", .path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("snapshot {} is corrupt: {reason}", .path.display())]
    SnapshotCorrupt { path: PathBuf, reason: String },

    #[error("failed to write snapshot {}: {source}", .path.display())]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> SyncError {
        let path = path.to_path_buf();
        move |source| SyncError::Io { path, source }
    }

    pub fn snapshot_write(path: &Path) -> impl FnOnce(io::Error) -> SyncError {
        let path = path.to_path_buf();
        move |source| SyncError::SnapshotWrite { path, source }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_keep_path() {
        let path = PathBuf::from("root/post.md");
        let err = SyncError::io(&path)(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, SyncError::Io { path: ref p, .. } if p == &path));

        let err = SyncError::snapshot_write(&path)(io::Error::new(io::ErrorKind::AlreadyExists, "tmp"));
        assert_eq!(err.to_string(), "failed to write snapshot root/post.md: tmp");
    }

    #[test]
    fn test_message_names_path() {
        let err = SyncError::ParseFailure {
            path: PathBuf::from("root/a.md"),
            reason: "bad yaml".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse root/a.md: bad yaml");
    }
}
