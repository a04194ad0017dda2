use std::path::Path;

use markdown::Options;
use spdlog::debug;

use crate::content::content_file::ContentFile;
use crate::content::content_format::ContentFormat;
use crate::content::front_matter;
use crate::content::{Document, Metadata};
use crate::error::{Result, SyncError};

/// Turns raw source bytes into a [`Document`].
pub trait ContentParser {
    fn parse(&self, file_path: &Path, raw: &[u8]) -> Result<Document>;
}

/// Markdown is rendered with GitHub flavoured options; HTML bodies pass through untouched.
/// Both may start with a front-matter block. A source without one parses with empty metadata.
pub struct SourceParser;

impl ContentParser for SourceParser {
    fn parse(&self, file_path: &Path, raw: &[u8]) -> Result<Document> {
        let content_file = ContentFile::from_bytes(file_path, raw)?;
        let (metadata, body) = Self::extract_metadata(&content_file)?;

        let document = match content_file.format {
            ContentFormat::Markdown => {
                let rendered_html = Self::render_markdown(file_path, body)?;
                debug!("rendered markdown file {} ({} bytes)", file_path.display(), rendered_html.len());
                Document {
                    doc_type: content_file.format.document_type(),
                    raw_source: content_file.raw_content.clone(),
                    rendered_html,
                    metadata,
                }
            }
            ContentFormat::Html => Document {
                doc_type: content_file.format.document_type(),
                raw_source: String::new(),
                rendered_html: body.to_string(),
                metadata,
            },
        };

        Ok(document)
    }
}

impl SourceParser {
    fn extract_metadata(content_file: &ContentFile) -> Result<(Metadata, &str)> {
        match front_matter::split(&content_file.raw_content) {
            Some(fm) => {
                let metadata = front_matter::parse(fm.block).map_err(|e| SyncError::ParseFailure {
                    path: content_file.file_path.clone(),
                    reason: format!("invalid front matter: {}", e),
                })?;
                Ok((metadata, fm.body))
            }
            None => Ok((Metadata::default(), content_file.raw_content.as_str())),
        }
    }

    fn render_markdown(file_path: &Path, md_text: &str) -> Result<String> {
        match markdown::to_html_with_options(md_text, &Options::gfm()) {
            Ok(x) => Ok(x),
            Err(e) => Err(SyncError::ParseFailure {
                path: file_path.to_path_buf(),
                reason: e.reason,
            }),
        }
    }
}
