//! Source tree scanning and CMake manifest generation
//!
//! Partitions the compiled sources of a tree into the executable target
//! (everything under the scan root) and the shared-library target (the
//! subset under the library sub-root), then serializes the partition into
//! the build file the Cedar build consumes.

pub mod codegen;
pub mod scan;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use self::scan::collect_sources;

/// File extension scanned for by default
pub const DEFAULT_EXTENSION: &str = "cpp";

/// A partition of discovered source files into build targets
#[derive(Debug, Clone, Serialize)]
pub struct SourceManifest {
    /// Every compiled source under the scan root
    pub sources: Vec<PathBuf>,
    /// The subset of `sources` under the library sub-root
    pub library_sources: Vec<PathBuf>,
}

impl SourceManifest {
    /// Scan `root` for sources and partition them against `lib_root`
    ///
    /// The tree is walked once; the library set is filtered out of the
    /// scanned set, so `library_sources` is a subset of `sources` by
    /// construction.
    pub fn scan(root: &Path, lib_root: &Path, extension: &str) -> Result<Self> {
        let sources = collect_sources(root, extension)?;
        let library_sources = sources
            .iter()
            .filter(|path| path.starts_with(lib_root))
            .cloned()
            .collect();
        Ok(Self {
            sources,
            library_sources,
        })
    }
}

pub use self::codegen::{render_cmake_manifest, write_cmake_manifest};
