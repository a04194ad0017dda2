//! Compressed on-disk snapshot of the [`PostStore`].
//!
//! The payload is pretty-printed JSON inside a gzip stream. Saving goes through a temp
//! file next to the snapshot that is created exclusively, then renamed over it, so the
//! previous snapshot stays intact until the rename.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use spdlog::{debug, info};

use crate::error::{Result, SyncError};
use crate::post_store::PostStore;

pub struct Snapshot {
    path: PathBuf,
}

/// A fully written temp file waiting to replace the snapshot.
///
/// Dropping it without [`StagedSnapshot::commit`] leaves the old snapshot in place and the
/// temp file on disk, the same state a crash before the rename would leave.
#[must_use]
pub struct StagedSnapshot {
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl Snapshot {
    pub fn new(path: &Path) -> Snapshot {
        Snapshot { path: path.to_path_buf() }
    }

    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Loads the store. A missing snapshot is an empty store; one that fails to decode is an
    /// error, never an empty store.
    pub fn load(&self) -> Result<PostStore> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("snapshot {} does not exist, starting with an empty store", self.path.display());
                return Ok(PostStore::new());
            }
            Err(source) => return Err(SyncError::SnapshotRead { path: self.path.clone(), source }),
        };

        let decoder = GzDecoder::new(BufReader::new(file));
        let store: Option<PostStore> = serde_json::from_reader(decoder).map_err(|e| SyncError::SnapshotCorrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let store = store.unwrap_or_default();

        info!("loaded {} posts from snapshot {}", store.len(), self.path.display());
        Ok(store)
    }

    pub fn save(&self, store: &PostStore) -> Result<()> {
        self.stage(store)?.commit()
    }

    /// First phase of a save: writes the whole store into the exclusively created temp file.
    pub fn stage(&self, store: &PostStore) -> Result<StagedSnapshot> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(SyncError::snapshot_write(parent))?;
        }

        let temp_path = self.temp_path();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(SyncError::snapshot_write(&temp_path))?;

        if let Err(e) = write_compressed(file, store) {
            // The temp file is ours; a stale one from another run never reaches this point
            let _ = fs::remove_file(&temp_path);
            return Err(SyncError::SnapshotWrite { path: temp_path, source: e });
        }

        debug!("staged {} posts in {}", store.len(), temp_path.display());
        Ok(StagedSnapshot {
            temp_path,
            final_path: self.path.clone(),
        })
    }
}

impl StagedSnapshot {
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Second phase of a save: atomically replaces the snapshot.
    pub fn commit(self) -> Result<()> {
        fs::rename(&self.temp_path, &self.final_path).map_err(SyncError::snapshot_write(&self.final_path))?;
        info!("snapshot {} updated", self.final_path.display());
        Ok(())
    }
}

fn write_compressed(file: File, store: &PostStore) -> io::Result<()> {
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
    serde_json::to_writer_pretty(&mut encoder, store)?;
    let writer = encoder.finish()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

/// The whole store as indented JSON, for inspection.
pub fn dump(store: &PostStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store)
}
