use anyhow::Result;
use std::path::Path;

use crate::manifest::{write_cmake_manifest, SourceManifest, DEFAULT_EXTENSION};

/// Run the manifest subcommand
pub fn manifest(root: &Path, lib_root: &Path, output: &Path) -> Result<()> {
    let manifest = SourceManifest::scan(root, lib_root, DEFAULT_EXTENSION)?;
    write_cmake_manifest(&manifest, output)?;
    println!(
        "Generated manifest for {} sources ({} in library) to {}",
        manifest.sources.len(),
        manifest.library_sources.len(),
        output.display()
    );
    Ok(())
}
