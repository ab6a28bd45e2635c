//! cedar-codegen: build-time code generators for the Cedar virtual machine
//!
//! This library generates the two derived build inputs of the Cedar tree:
//! the C opcode header (constants plus a per-opcode foreach macro) and the
//! CMake manifest binding scanned sources to the executable and
//! shared-library targets.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod opcode;
pub mod output;

pub use error::{Error, Result};

// Re-export commonly used types
pub use manifest::SourceManifest;
pub use opcode::{cedar_opcodes, EncodingKind, Opcode, OpcodeRegistry};
