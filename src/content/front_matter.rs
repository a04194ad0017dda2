//! YAML front matter delimited by `---` lines at the top of a source file.
//!
//! ```text
//! ---
//! id: 5f0c...
//! title: My First Post
//! ---
//! Body text, kept byte for byte.
//! ```

use std::path::Path;

use crate::content::Metadata;
use crate::error::{Result, SyncError};

pub const DELIMITER: &str = "---";

#[derive(Debug, PartialEq)]
pub struct FrontMatter<'a> {
    /// YAML between the delimiter lines.
    pub block: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

fn strip_opening_line(text: &str) -> Option<&str> {
    text.strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
}

/// Splits `text` into front matter and body. `None` when the text does not open with a
/// delimiter line or the closing one is missing.
pub fn split(text: &str) -> Option<FrontMatter<'_>> {
    let rest = strip_opening_line(text)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Some(FrontMatter {
                block: &rest[..offset],
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    None
}

pub fn parse(block: &str) -> std::result::Result<Metadata, serde_yaml::Error> {
    if block.trim().is_empty() {
        return Ok(Metadata::default());
    }
    serde_yaml::from_str::<Metadata>(block)
}

pub fn render(metadata: &Metadata) -> std::result::Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(metadata)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
}

/// Replaces the front matter of `text` with a fresh rendering of `metadata`.
pub fn rewrite(file_path: &Path, text: &str, metadata: &Metadata) -> Result<String> {
    let front_matter = split(text).ok_or_else(|| SyncError::InvalidSourceFormat {
        path: file_path.to_path_buf(),
    })?;

    let header = render(metadata).map_err(|e| SyncError::Serialize {
        path: file_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(header + front_matter.body)
}
