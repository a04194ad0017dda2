use std::path::Path;

use crate::content::DocumentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Markdown,
    Html,
}

impl ContentFormat {
    /// Guesses the format from the file extension. `None` means the file is not a source.
    pub fn from_path(file_path: &Path) -> Option<ContentFormat> {
        let ext = file_path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(ContentFormat::Markdown),
            "html" | "htm" => Some(ContentFormat::Html),
            _ => None,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        match self {
            ContentFormat::Markdown => DocumentType::Markdown,
            ContentFormat::Html => DocumentType::Html,
        }
    }
}
