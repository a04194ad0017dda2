use anyhow::Context;
use spdlog::{info, warn};

use sitesync::generator::generate;
use sitesync::logger::configure_logger;
use sitesync::snapshot::{dump, Snapshot};
use sitesync::synchronizer::Synchronizer;

use crate::config::open_config;
use crate::SyncArgs;

pub fn sync_cmd(args: SyncArgs) -> anyhow::Result<()> {
    let config = open_config(args.config_path)?;
    if let Err(e) = configure_logger(&config) {
        warn!("could not configure logger, keeping the default one: {}", e);
    }

    let snapshot = Snapshot::new(&config.paths.snapshot_file);
    let mut store = snapshot.load()?;

    let synchronizer = Synchronizer::from_defaults(&config.defaults);
    let report = generate(&config, &synchronizer, &mut store)?;

    snapshot.save(&store)?;
    info!("{} posts stored, {} new, {} changed, {} unchanged, {} failed",
        store.len(), report.created, report.changed, report.unchanged, report.failures.len());

    if config.defaults.dump_store() {
        let json = dump(&store).context("Could not render the post store")?;
        println!("{}", json);
    }

    Ok(())
}
