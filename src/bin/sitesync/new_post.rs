use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

use sitesync::content::front_matter;
use sitesync::content::Metadata;
use sitesync::util::os_helper::author_name;

use crate::{NewArgs, PostOutput};

/// Front matter for a post that has not been synced yet. The id and path stay empty so the
/// first sync assigns them.
fn render_header(name: &str, date: DateTime<Utc>, title: Option<&str>) -> anyhow::Result<String> {
    let metadata = Metadata {
        title: title.unwrap_or("Replace with title").to_string(),
        author: name.to_string(),
        date: Some(date),
        ..Default::default()
    };
    Ok(front_matter::render(&metadata)?)
}

const BODY_TEMPLATE: &str = "
Summary shown in post listings.

<!-- more -->

The rest of the post.
";

/// `<yyyymmdd>_<ascii words of the title>`, used as file or directory name.
fn post_file_stem(title: &str, date: &NaiveDate) -> String {
    let ascii = unidecode::unidecode(title).to_lowercase();
    let words: Vec<String> = ascii.split_whitespace()
        .map(|word| word.chars().filter(char::is_ascii_alphanumeric).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect();

    format!("{}_{}", date.format("%Y%m%d"), words.join("_"))
}

fn write_new(path: &Path, content: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Where the post lands for file and dir outputs, `None` for stdout.
fn target_path(output: &PostOutput, out_dir: &Path, title: &str, date: &NaiveDate) -> Option<PathBuf> {
    let name = post_file_stem(title, date);
    match output {
        PostOutput::Stdout => None,
        PostOutput::File => Some(out_dir.join(format!("{}.md", name))),
        PostOutput::Dir => Some(out_dir.join(name).join("index.md")),
    }
}

pub fn new_post_cmd(args: NewArgs) -> anyhow::Result<()> {
    let name = author_name(args.name.as_deref());
    let date = Utc::now().trunc_subsecs(0);

    if args.output != PostOutput::Stdout && args.title.is_none() {
        bail!("For file and dir outputs, title is required");
    }

    let content = render_header(&name, date, args.title.as_deref())? + BODY_TEMPLATE;

    let title = args.title.as_deref().unwrap_or_default();
    match target_path(&args.output, &args.out_dir, title, &date.date_naive()) {
        None => print!("{}", content),
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Could not create directory {}", parent.display()))?;
            }
            println!("Creating post {}", path.display());
            write_new(&path, &content)?;
        }
    }

    Ok(())
}
