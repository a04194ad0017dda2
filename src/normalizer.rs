use std::fs;
use std::path::Path;

use chrono::{DateTime, SubsecRound, Utc};
use spdlog::debug;
use uuid::Uuid;

use crate::content::{front_matter, Document, DocumentType};
use crate::error::{Result, SyncError};
use crate::path_gen::PathGenerator;

/// Fresh post identifier: 128 random bits as 32 lowercase hex chars.
pub fn new_post_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Fills in missing `id`, `date` and `path` and writes them back into markdown sources.
pub struct Normalizer {
    path_generator: PathGenerator,
}

impl Normalizer {
    pub fn new(path_generator: PathGenerator) -> Self {
        Normalizer { path_generator }
    }

    /// Returns whether any field was assigned.
    ///
    /// Markdown sources get their front matter replaced on disk and `raw_source` updated to
    /// match. Other document types are only changed in memory. Once all three fields are
    /// set this never touches the file.
    pub fn normalize(&self, file_path: &Path, doc: &mut Document, now: DateTime<Utc>) -> Result<bool> {
        let mut updated = false;

        if doc.metadata.id.is_empty() {
            doc.metadata.id = new_post_id();
            updated = true;
            debug!("assigned new ID {} to document {}", doc.metadata.id, file_path.display());
        }

        if doc.metadata.date.is_none() {
            doc.metadata.date = Some(now.trunc_subsecs(0));
            updated = true;
            debug!("assigned new date to document {}", file_path.display());
        }

        if doc.metadata.path.is_empty() {
            doc.metadata.path = self.path_generator.generate(&doc.metadata.title);
            updated = true;
            debug!("assigned path {} to document {}", doc.metadata.path, file_path.display());
        }

        if !updated {
            return Ok(false);
        }

        match doc.doc_type {
            DocumentType::Markdown => {
                let rewritten = front_matter::rewrite(file_path, &doc.raw_source, &doc.metadata)?;
                write_preserving_permissions(file_path, &rewritten)?;
                doc.raw_source = rewritten;
                debug!("saved updated document {}", file_path.display());
            }
            _ => debug!("skipping write-back for non-markdown document {}", file_path.display()),
        }

        Ok(true)
    }
}

fn write_preserving_permissions(file_path: &Path, content: &str) -> Result<()> {
    let permissions = fs::metadata(file_path).map_err(SyncError::io(file_path))?.permissions();
    fs::write(file_path, content).map_err(SyncError::io(file_path))?;
    fs::set_permissions(file_path, permissions).map_err(SyncError::io(file_path))
}
