use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

use crate::output::write_atomic;

use super::SourceManifest;

/// Executable target receiving every scanned source
pub const EXECUTABLE_TARGET: &str = "cedar";
/// Shared-library target receiving the library subset
pub const LIBRARY_TARGET: &str = "cedar-lib";
/// Both targets produce artifacts named after the VM
const OUTPUT_NAME: &str = "cedar";
/// Link line shared by both targets
const LINK_LIBRARIES: &str = "uv_a ${CMAKE_DL_LIBS} -lgc -lgccpp -pthread";

/// Render the CMake source manifest for a scanned tree
///
/// Emits the executable target over all sources, the shared-library target
/// over the library subset, and the fixed linker trailer. Paths are written
/// with `/` separators on every platform.
pub fn render_cmake_manifest(manifest: &SourceManifest) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "# generated by cedar-codegen. DO NOT MODIFY")?;
    writeln!(out)?;

    writeln!(out, "add_executable({}", EXECUTABLE_TARGET)?;
    for path in &manifest.sources {
        writeln!(out, "\t{}", unix_path(path))?;
    }
    writeln!(out, ")")?;

    writeln!(out, "add_library({} SHARED", LIBRARY_TARGET)?;
    for path in &manifest.library_sources {
        writeln!(out, "\t{}", unix_path(path))?;
    }
    writeln!(out, ")")?;

    writeln!(out)?;
    for target in [EXECUTABLE_TARGET, LIBRARY_TARGET] {
        writeln!(out, "target_link_libraries({} {})", target, LINK_LIBRARIES)?;
        writeln!(
            out,
            "set_target_properties({} PROPERTIES OUTPUT_NAME {})",
            target, OUTPUT_NAME
        )?;
        writeln!(out)?;
    }

    Ok(out)
}

/// Render the manifest and write it over `path` atomically
pub fn write_cmake_manifest(manifest: &SourceManifest, path: &Path) -> Result<()> {
    let content = render_cmake_manifest(manifest)?;
    write_atomic(path, &content)
        .with_context(|| format!("Failed to write source manifest to {}", path.display()))?;
    log::debug!(
        "wrote manifest with {} sources ({} library) to {}",
        manifest.sources.len(),
        manifest.library_sources.len(),
        path.display()
    );
    Ok(())
}

/// Join path components with `/` regardless of host platform
fn unix_path(path: &Path) -> String {
    path.iter()
        .map(|component| component.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
