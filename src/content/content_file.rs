use std::path::{Path, PathBuf};

use crate::content::content_format::ContentFormat;
use crate::error::{Result, SyncError};

/// Raw source text paired with the format guessed from its path.
pub struct ContentFile {
    pub file_path: PathBuf,
    pub format: ContentFormat,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_bytes(file_path: &Path, raw: &[u8]) -> Result<ContentFile> {
        let format = match ContentFormat::from_path(file_path) {
            None => return Err(SyncError::ParseFailure {
                path: file_path.to_path_buf(),
                reason: "could not guess the type of the file".to_string(),
            }),
            Some(format) => format,
        };

        let raw_content = match String::from_utf8(raw.to_vec()) {
            Ok(content) => content,
            Err(e) => return Err(SyncError::ParseFailure {
                path: file_path.to_path_buf(),
                reason: format!("source is not valid UTF-8: {}", e),
            }),
        };

        Ok(ContentFile {
            file_path: file_path.to_path_buf(),
            format,
            raw_content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let file = ContentFile::from_bytes(Path::new("root/a.md"), b"# Hi\n").unwrap();
        assert_eq!(file.format, ContentFormat::Markdown);
        assert_eq!(file.raw_content, "# Hi\n");
    }

    #[test]
    fn test_rejects_unknown_and_binary() {
        let res = ContentFile::from_bytes(Path::new("root/a.txt"), b"text");
        assert!(matches!(res, Err(SyncError::ParseFailure { .. })));

        let res = ContentFile::from_bytes(Path::new("root/a.md"), &[0xff, 0xfe, 0x00]);
        assert!(matches!(res, Err(SyncError::ParseFailure { .. })));
    }
}
