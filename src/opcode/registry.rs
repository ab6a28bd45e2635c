use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Operand encoding for a bytecode instruction
///
/// Describes what follows the opcode byte in a compiled instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingKind {
    /// No operand bytes
    NoArg,
    /// Immediate integer operand
    ImmInt,
    /// Immediate float operand
    ImmFloat,
}

impl EncodingKind {
    /// Tag emitted into the opcode foreach table
    pub fn tag(&self) -> &'static str {
        match self {
            EncodingKind::NoArg => "no_arg",
            EncodingKind::ImmInt => "imm_int",
            EncodingKind::ImmFloat => "imm_float",
        }
    }
}

/// A single instruction definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opcode {
    /// Canonical upper-case instruction name (e.g. "LOAD_LOCAL")
    pub name: String,
    /// Operand encoding kind
    pub encoding: EncodingKind,
    /// Net change in evaluation-stack depth
    pub stack_effect: i32,
}

impl Opcode {
    /// Name of the numeric constant emitted for this opcode
    pub fn constant(&self) -> String {
        format!("OP_{}", self.name)
    }
}

/// Ordered registry of instruction definitions
///
/// The numeric code assigned to each opcode is its zero-based append
/// position. That makes registry order part of the binary contract:
/// reordering or removing an entry changes the value of every constant
/// after it, breaking already-compiled instruction streams. New opcodes
/// are appended at the end only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpcodeRegistry {
    ops: Vec<Opcode>,
}

impl OpcodeRegistry {
    /// Highest number of opcodes a one-byte code can address; also the
    /// bound of the two-hex-digit constant rendering
    pub const MAX_OPCODES: usize = 256;

    /// Create an empty registry
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append an instruction definition and return its assigned code
    ///
    /// Names are case-insensitive and canonicalized to upper case.
    /// Duplicate or malformed names and registry overflow are rejected
    /// here, before any output is generated.
    pub fn define(&mut self, name: &str, encoding: EncodingKind, stack_effect: i32) -> Result<u8> {
        let canonical = canonicalize_name(name)?;
        if self.ops.iter().any(|op| op.name == canonical) {
            return Err(Error::DuplicateOpcode { name: canonical });
        }
        if self.ops.len() >= Self::MAX_OPCODES {
            return Err(Error::RegistryOverflow {
                count: self.ops.len(),
                max: Self::MAX_OPCODES,
            });
        }

        let code = self.ops.len() as u8;
        self.ops.push(Opcode {
            name: canonical,
            encoding,
            stack_effect,
        });
        Ok(code)
    }

    /// Number of registered opcodes
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All definitions in registry (i.e. code) order
    pub fn opcodes(&self) -> &[Opcode] {
        &self.ops
    }

    /// Iterate over definitions in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Opcode> {
        self.ops.iter()
    }
}

/// Upper-case an opcode name, rejecting anything that would not form a
/// valid C identifier once the constant prefix is applied
fn canonicalize_name(name: &str) -> Result<String> {
    let canonical = name.to_ascii_uppercase();
    let mut chars = canonical.chars();
    let valid_head = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_head || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::InvalidOpcodeName {
            name: name.to_string(),
        });
    }
    Ok(canonical)
}
