use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::opcode::{cedar_opcodes, EncodingKind, OpcodeRegistry};

#[derive(Serialize)]
struct OpcodeRow<'a> {
    code: u8,
    name: &'a str,
    constant: String,
    encoding: EncodingKind,
    stack_effect: i32,
}

/// Run the inspect subcommand
pub fn inspect(format: &str) -> Result<()> {
    let registry = cedar_opcodes()?;
    match format {
        "json" => print_json(&registry),
        "text" => {
            print_text(&registry);
            Ok(())
        }
        other => Err(anyhow!("Unknown inspect format: {}", other)),
    }
}

fn print_json(registry: &OpcodeRegistry) -> Result<()> {
    let rows: Vec<OpcodeRow> = registry
        .iter()
        .enumerate()
        .map(|(index, op)| OpcodeRow {
            code: index as u8,
            name: &op.name,
            constant: op.constant(),
            encoding: op.encoding,
            stack_effect: op.stack_effect,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_text(registry: &OpcodeRegistry) {
    println!("{:<6} {:<16} {:<28} {:<10} {}", "code", "name", "constant", "type", "effect");
    for (index, op) in registry.iter().enumerate() {
        println!(
            "0x{:02x}   {:<16} {:<28} {:<10} {}",
            index,
            op.name,
            op.constant(),
            op.encoding.tag(),
            op.stack_effect
        );
    }
}
