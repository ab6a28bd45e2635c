use anyhow::Result;
use std::path::Path;

use crate::opcode::{cedar_opcodes, write_opcode_header};

/// Run the opcodes subcommand
pub fn opcodes(output: &Path) -> Result<()> {
    let registry = cedar_opcodes()?;
    write_opcode_header(&registry, output)?;
    println!(
        "Generated {} opcodes to {}",
        registry.len(),
        output.display()
    );
    Ok(())
}
