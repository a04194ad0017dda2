use std::env;
use std::path::PathBuf;

use anyhow::Context;

use sitesync::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()));

    let candidates = [
        exe_dir,
        env::current_dir().ok(),
        dirs::config_dir(),
    ];

    candidates.into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// An explicit path must exist. Without one, the first `sitesync.toml` found wins, and no file
/// at all means built-in defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> anyhow::Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        eprintln!("No {} found. Using defaults", CFG_FILE_NAME);
        return Ok(Config::default());
    };

    eprintln!("Reading config from {}", config_path.display());
    let config = read_config(&config_path)
        .with_context(|| format!("Could not load configuration {}", config_path.display()))?;

    match config.log {
        Some(ref log) => match log.location {
            Some(ref location) => eprintln!("Log enabled. Files will be written in {}", location.display()),
            None => eprintln!("Log enabled. Using stderr"),
        },
        None => eprintln!("Log not configured. Using stderr"),
    }

    Ok(config)
}
