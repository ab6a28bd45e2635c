use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Collect all files with `extension` under `dir` (recursive)
///
/// Results are sorted by path so the emitted manifest does not depend on
/// directory enumeration order.
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::ScanRoot {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_sources_recursive(dir, extension, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_sources_recursive(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io_at(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| Error::io_at(dir, e))?.path();
        if path.is_dir() {
            collect_sources_recursive(&path, extension, files)?;
        } else if path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }
    log::debug!("scanned {}: {} sources so far", dir.display(), files.len());
    Ok(())
}
