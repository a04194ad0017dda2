use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::dump::dump_cmd;
use crate::new_post::new_post_cmd;
use crate::sync::sync_cmd;

mod config;
mod dump;
mod new_post;
mod sync;

pub const CFG_FILE_NAME: &str = "sitesync.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Synchronize the content tree into the post snapshot
    Sync(SyncArgs),
    /// Print the decompressed post snapshot as JSON
    Dump(DumpArgs),
    /// Scaffold a new markdown post
    New(NewArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct SyncArgs {
    /// Configuration file. If empty, sitesync.toml is searched in the executable dir, the
    /// current dir and the user config dir
    #[arg(short, long)]
    config_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct DumpArgs {
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Snapshot file to print, overriding the configured one
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct NewArgs {
    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    name: Option<String>,

    /// Title of the post
    #[arg(short, long)]
    title: Option<String>,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,

    /// Directory where file and dir posts are created
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to a file (posts without images)
    File,
    /// Writes the new post content to a directory (posts with images)
    Dir,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PostOutput::Stdout => "stdout",
            PostOutput::File => "file",
            PostOutput::Dir => "dir",
        };
        write!(f, "{}", name)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args {
        Args::Sync(args) => sync_cmd(args),
        Args::Dump(args) => dump_cmd(args),
        Args::New(args) => new_post_cmd(args),
    }
}
