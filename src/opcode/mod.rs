//! Opcode table and C header generation
//!
//! The registry assigns each instruction a numeric code equal to its append
//! position; the codegen half serializes the table into the header consumed
//! by the Cedar VM build.

pub mod codegen;
pub mod registry;
pub mod table;

pub use self::codegen::{render_opcode_header, write_opcode_header, FOREACH_MACRO};
pub use self::registry::{EncodingKind, Opcode, OpcodeRegistry};
pub use self::table::cedar_opcodes;
