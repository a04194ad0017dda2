use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use spdlog::{debug, warn};
use walkdir::WalkDir;

pub struct SourceList {
    pub root_dir: PathBuf,
}

impl SourceList {
    /// Every regular file under the root, sorted by path.
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = vec![];
        for entry in WalkDir::new(&self.root_dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Replaces `dist_dir` with a fresh copy of `public_dir`. Returns the number of files copied.
///
/// A missing public directory only leaves an empty output directory behind.
pub fn stage_assets(public_dir: &Path, dist_dir: &Path) -> io::Result<usize> {
    if dist_dir.is_dir() {
        debug!("deleting output directory {}", dist_dir.display());
        fs::remove_dir_all(dist_dir)?;
    }
    fs::create_dir_all(dist_dir)?;

    if !public_dir.is_dir() {
        warn!("public directory {} does not exist, no static files copied", public_dir.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(public_dir) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(public_dir)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let dst_path = dist_dir.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path)?;
        } else {
            fs::copy(entry.path(), &dst_path)?;
            copied += 1;
        }
    }

    debug!("copied {} static files into {}", copied, dist_dir.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_retrieve_files_recursive_sorted() -> io::Result<()> {
        let dir = TempDir::new()?;
        let root_dir = dir.path().join("root");
        fs::create_dir_all(root_dir.join("2024").join("intro"))?;
        fs::write(root_dir.join("b.md"), "b")?;
        fs::write(root_dir.join("a.md"), "a")?;
        fs::write(root_dir.join("2024").join("intro").join("index.md"), "i")?;

        let files = SourceList { root_dir: root_dir.clone() }.retrieve_files()?;
        assert_eq!(files, vec![
            root_dir.join("2024").join("intro").join("index.md"),
            root_dir.join("a.md"),
            root_dir.join("b.md"),
        ]);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let list = SourceList { root_dir: dir.path().join("nope") };
        assert!(list.retrieve_files().is_err());
    }

    #[test]
    fn test_stage_assets() -> io::Result<()> {
        let dir = TempDir::new()?;
        let public_dir = dir.path().join("public");
        let dist_dir = dir.path().join("dist");
        fs::create_dir_all(public_dir.join("css"))?;
        fs::write(public_dir.join("favicon.ico"), "ico")?;
        fs::write(public_dir.join("css").join("site.css"), "body {}")?;
        fs::create_dir_all(&dist_dir)?;
        fs::write(dist_dir.join("stale.html"), "old")?;

        assert_eq!(stage_assets(&public_dir, &dist_dir)?, 2);
        assert_eq!(fs::read_to_string(dist_dir.join("css").join("site.css"))?, "body {}");
        assert!(dist_dir.join("favicon.ico").exists());
        assert!(!dist_dir.join("stale.html").exists());
        Ok(())
    }

    #[test]
    fn test_stage_assets_without_public() -> io::Result<()> {
        let dir = TempDir::new()?;
        let dist_dir = dir.path().join("dist");
        assert_eq!(stage_assets(&dir.path().join("public"), &dist_dir)?, 0);
        assert!(dist_dir.is_dir());
        Ok(())
    }
}
