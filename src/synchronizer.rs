use std::path::Path;

use spdlog::debug;

use crate::config::Defaults;
use crate::content::content_parser::{ContentParser, SourceParser};
use crate::content::Document;
use crate::error::Result;
use crate::normalizer::Normalizer;
use crate::path_gen::{OsEntropy, PathGenerator};
use crate::post_store::PostStore;
use crate::util::clock::{Clock, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Created,
    Changed,
    Unchanged,
}

#[derive(Debug)]
pub struct SyncOutcome {
    pub document: Document,
    pub status: SyncStatus,
}

/// Merges freshly parsed sources into a [`PostStore`].
///
/// The metadata id is the merge key, so a file can move without losing its post. The
/// content digest decides whether `updated_at` moves, never file timestamps.
pub struct Synchronizer {
    parser: Box<dyn ContentParser>,
    normalizer: Normalizer,
    clock: Box<dyn Clock>,
}

impl Synchronizer {
    pub fn new(parser: Box<dyn ContentParser>, normalizer: Normalizer, clock: Box<dyn Clock>) -> Self {
        Synchronizer { parser, normalizer, clock }
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        let path_generator = PathGenerator::new(defaults.route_prefix(), defaults.root_prefix(), Box::new(OsEntropy));
        Synchronizer::new(Box::new(SourceParser), Normalizer::new(path_generator), Box::new(SystemClock))
    }

    /// Parses, normalizes and merges one source file.
    ///
    /// Any error leaves the store untouched for this file. That includes a markdown source
    /// whose new metadata could not be written back: merging it would store an id the file
    /// does not carry, and the next run would mint another one.
    pub fn sync(&self, store: &mut PostStore, file_path: &Path, raw: &[u8]) -> Result<SyncOutcome> {
        debug!("start processing {}", file_path.display());
        let now = self.clock.now();

        let mut document = self.parser.parse(file_path, raw)?;
        self.normalizer.normalize(file_path, &mut document, now)?;

        let hash = document.hash();
        let (post, created) = store.locate_or_create(&document.metadata.id, now);

        post.file_path = file_path.to_path_buf();
        post.url_path = document.metadata.path.clone();
        post.main = document.clone();

        let status = if post.content_hash != hash {
            post.content_hash = hash;
            post.updated_at = now;
            if created { SyncStatus::Created } else { SyncStatus::Changed }
        } else {
            SyncStatus::Unchanged
        };

        debug!("end processing {} (post {}, {:?})", file_path.display(), post.id, status);
        Ok(SyncOutcome { document, status })
    }
}
