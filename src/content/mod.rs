use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod content_file;
pub mod content_format;
pub mod content_parser;
pub mod front_matter;

/// Source format of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Unknown,
    Markdown,
    Html,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Unknown => "unknown",
            DocumentType::Markdown => "markdown",
            DocumentType::Html => "html",
        }
    }
}

impl Display for DocumentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Authorial facts carried in a document's front matter.
///
/// `id`, `date` and `path` are assigned once by the normalizer and never change
/// automatically afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::text_utils::metadata_date")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Code module the post documents. Only meaningful on the main document.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_ref: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub canonical: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
}

/// One language-specific rendering of a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type", default)]
    pub doc_type: DocumentType,
    /// Full source text, front matter included. Empty for HTML documents.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rendered_html: String,
    #[serde(default)]
    pub metadata: Metadata,
}
