use anyhow::Context;
use spdlog::warn;

use sitesync::logger::configure_logger;
use sitesync::snapshot::{dump, Snapshot};

use crate::config::open_config;
use crate::DumpArgs;

pub fn dump_cmd(args: DumpArgs) -> anyhow::Result<()> {
    let config = open_config(args.config_path)?;
    if let Err(e) = configure_logger(&config) {
        warn!("could not configure logger, keeping the default one: {}", e);
    }

    let snapshot_file = args.snapshot.unwrap_or(config.paths.snapshot_file);
    let store = Snapshot::new(&snapshot_file).load()?;
    let json = dump(&store).context("Could not render the post store")?;
    println!("{}", json);

    Ok(())
}
