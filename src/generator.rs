use std::fs;
use std::path::PathBuf;

use spdlog::{debug, error, info};

use crate::config::Config;
use crate::content::content_format::ContentFormat;
use crate::error::{Result, SyncError};
use crate::post_store::PostStore;
use crate::source_list::{stage_assets, SourceList};
use crate::synchronizer::{SyncStatus, Synchronizer};

#[derive(Debug, Default)]
pub struct RunReport {
    pub created: usize,
    pub changed: usize,
    pub unchanged: usize,
    /// Files that are not markdown sources.
    pub skipped: usize,
    pub failures: Vec<(PathBuf, SyncError)>,
}

impl RunReport {
    pub fn processed(&self) -> usize {
        self.created + self.changed + self.unchanged
    }
}

/// Stages static assets, then syncs every markdown source under the content root into `store`.
///
/// Only markdown gets missing ids written back to the file, so other formats are never
/// walked: an HTML page without an id would come back as a new post on every run.
///
/// A source that fails is logged, recorded in the report and skipped. Only a failure to
/// stage assets or list the content root aborts the run, before the store is touched.
pub fn generate(config: &Config, synchronizer: &Synchronizer, store: &mut PostStore) -> Result<RunReport> {
    info!("start generating website");

    let paths = &config.paths;
    let copied = stage_assets(&paths.public_dir, &paths.dist_dir).map_err(SyncError::io(&paths.dist_dir))?;
    info!("copied {} static files", copied);

    let sources = SourceList { root_dir: paths.root_dir.clone() };
    let files = sources.retrieve_files().map_err(SyncError::io(&paths.root_dir))?;

    let mut report = RunReport::default();
    for path in files {
        if ContentFormat::from_path(&path) != Some(ContentFormat::Markdown) {
            debug!("skipping {}", path.display());
            report.skipped += 1;
            continue;
        }

        let result = fs::read(&path)
            .map_err(SyncError::io(&path))
            .and_then(|raw| synchronizer.sync(store, &path, &raw));

        match result {
            Ok(outcome) => match outcome.status {
                SyncStatus::Created => report.created += 1,
                SyncStatus::Changed => report.changed += 1,
                SyncStatus::Unchanged => report.unchanged += 1,
            },
            Err(err) => {
                error!("failed to process {}: {}", path.display(), err);
                report.failures.push((path, err));
            }
        }
    }

    info!("end generating website: {} processed ({} new, {} changed), {} failed, {} skipped",
        report.processed(), report.created, report.changed, report.failures.len(), report.skipped);
    Ok(report)
}
