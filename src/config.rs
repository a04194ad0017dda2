use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::path_gen::{DEFAULT_ROOT_PREFIX, DEFAULT_ROUTE_PREFIX};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    /// Content sources, walked recursively.
    pub root_dir: PathBuf,
    /// Static assets copied verbatim into `dist_dir`.
    pub public_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub snapshot_file: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            root_dir: PathBuf::from("root"),
            public_dir: PathBuf::from("public"),
            dist_dir: PathBuf::from("dist"),
            snapshot_file: PathBuf::from("zdata/data.json.gz"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    pub route_prefix: Option<String>,
    pub root_prefix: Option<String>,
    pub dump_store: Option<bool>,
}

impl Defaults {
    pub fn route_prefix(&self) -> &str {
        self.route_prefix.as_deref().unwrap_or(DEFAULT_ROUTE_PREFIX)
    }

    pub fn root_prefix(&self) -> &str {
        self.root_prefix.as_deref().unwrap_or(DEFAULT_ROOT_PREFIX)
    }

    pub fn dump_store(&self) -> bool {
        self.dump_store.unwrap_or(true)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };

    if !str_path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .and_then(|p| p.to_str())
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Could not resolve the executable directory"))?;
    Ok(PathBuf::from(str_path.replace("${exe_dir}", exe_dir)))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        root_dir: parse_path(cfg.paths.root_dir)?,
        public_dir: parse_path(cfg.paths.public_dir)?,
        dist_dir: parse_path(cfg.paths.dist_dir)?,
        snapshot_file: parse_path(cfg.paths.snapshot_file)?,
    };

    if let Some(ref mut log) = cfg.log {
        if let Some(location) = log.location.take() {
            log.location = Some(parse_path(location)?);
        }
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
