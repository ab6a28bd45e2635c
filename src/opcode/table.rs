use crate::error::Result;

use super::registry::{EncodingKind, OpcodeRegistry};

/// Build the Cedar instruction table
///
/// Entries are appended in code order, so this list is the binary contract
/// for compiled Cedar bytecode. Extend it at the end only.
pub fn cedar_opcodes() -> Result<OpcodeRegistry> {
    use EncodingKind::{ImmFloat, ImmInt, NoArg};

    let mut registry = OpcodeRegistry::new();

    registry.define("NOP", NoArg, 0)?;
    registry.define("NIL", NoArg, 1)?;

    // constant-pool index operand
    registry.define("CONST", ImmInt, 1)?;

    // literal pushes
    registry.define("FLOAT", ImmFloat, 1)?;
    registry.define("INT", ImmInt, 1)?;

    // locals are addressed relative to the stack frame base
    registry.define("LOAD_LOCAL", ImmInt, 1)?;
    registry.define("SET_LOCAL", ImmInt, -1)?;

    registry.define("LOAD_GLOBAL", ImmInt, 0)?;
    registry.define("SET_GLOBAL", ImmInt, -1)?;

    registry.define("CONS", NoArg, -1)?;
    registry.define("CALL", NoArg, -1)?;
    registry.define("MAKE_FUNC", ImmInt, 1)?;
    registry.define("ARG_POP", ImmInt, 1)?;
    registry.define("RETURN", NoArg, 0)?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let registry = cedar_opcodes().unwrap();
        assert_eq!(registry.len(), 14);

        let ops = registry.opcodes();
        assert_eq!(ops[0].name, "NOP");
        assert_eq!(ops[2].name, "CONST");
        assert_eq!(ops.last().unwrap().name, "RETURN");
    }
}
