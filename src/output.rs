//! Atomic output-file handling
//!
//! Generated files are build inputs for downstream tooling, so a consumer
//! must never observe a half-written document. The full document is
//! rendered in memory first, then staged into a temporary file beside the
//! destination and renamed over it.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Write `content` to `path` as a single atomic replacement
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    // stage in the destination directory so the final rename never
    // crosses a filesystem boundary
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| Error::io_at(dir, e))?;
    staged
        .write_all(content.as_bytes())
        .map_err(|e| Error::io_at(path, e))?;
    staged
        .persist(path)
        .map_err(|e| Error::io_at(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_atomic_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale contents that are longer").unwrap();

        write_atomic(&path, "fresh").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_atomic_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        assert!(write_atomic(&path, "content").is_err());
        assert!(!path.exists());
    }
}
