use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

use crate::output::write_atomic;

use super::registry::OpcodeRegistry;

/// Name of the emitted per-opcode foreach macro
pub const FOREACH_MACRO: &str = "CEDAR_FOREACH_OPCODE";

/// Render the C opcode header for a registry
///
/// The document carries two encodings of the table: a `#define` constant
/// per opcode whose value is the opcode's registry position in two-digit
/// hex, and a function-style foreach macro that invokes a caller-supplied
/// macro once per opcode with `(name, constant, encoding, stack effect)`.
pub fn render_opcode_header(registry: &OpcodeRegistry) -> Result<String> {
    let mut code = String::new();

    writeln!(code, "/* Auto-generated by cedar-codegen - do not edit manually. */")?;
    writeln!(code, "#pragma once")?;
    writeln!(code, "#ifndef __OPCODE_H")?;
    writeln!(code, "#define __OPCODE_H")?;
    writeln!(code)?;

    writeln!(code, "/* Instruction opcodes for compiled code */")?;
    for (index, op) in registry.iter().enumerate() {
        writeln!(code, "#define OP_{:<24} 0x{:02x}", op.name, index)?;
    }
    writeln!(code)?;

    writeln!(code, "/* Instruction opcode foreach macro for code generation */")?;
    writeln!(code, "/* Arg order: (name, bytecode, type, stack effect) */")?;
    writeln!(code, "#define {}(V) \\", FOREACH_MACRO)?;
    for (index, op) in registry.iter().enumerate() {
        write!(
            code,
            "  V({}, {}, {}, {})",
            op.name,
            op.constant(),
            op.encoding.tag(),
            op.stack_effect
        )?;
        // the host macro syntax forbids a continuation after the last entry
        if index < registry.len() - 1 {
            write!(code, " \\")?;
        }
        writeln!(code)?;
    }

    writeln!(code)?;
    writeln!(code, "#endif")?;

    Ok(code)
}

/// Render the opcode header and write it over `path` atomically
pub fn write_opcode_header(registry: &OpcodeRegistry, path: &Path) -> Result<()> {
    let content = render_opcode_header(registry)?;
    write_atomic(path, &content)
        .with_context(|| format!("Failed to write opcode header to {}", path.display()))?;
    log::debug!(
        "wrote {} opcode constants to {}",
        registry.len(),
        path.display()
    );
    Ok(())
}
