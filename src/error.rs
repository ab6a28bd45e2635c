use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Custom error types for the Cedar code generators
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(cedar_codegen::io_error))]
    Io(String),

    #[error("Duplicate opcode: {name}")]
    #[diagnostic(code(cedar_codegen::duplicate_opcode))]
    DuplicateOpcode { name: String },

    #[error("Invalid opcode name: {name:?}")]
    #[diagnostic(code(cedar_codegen::invalid_opcode_name))]
    InvalidOpcodeName { name: String },

    #[error("Opcode registry is full: {count} entries, but a one-byte opcode encodes at most {max}")]
    #[diagnostic(code(cedar_codegen::registry_overflow))]
    RegistryOverflow { count: usize, max: usize },

    #[error("Source root is not a directory: {path}")]
    #[diagnostic(code(cedar_codegen::scan_root))]
    ScanRoot { path: PathBuf },
}

impl Error {
    /// Create an I/O error tagged with the path it occurred on
    pub fn io_at(path: &std::path::Path, err: std::io::Error) -> Self {
        Error::Io(format!("{}: {}", path.display(), err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
