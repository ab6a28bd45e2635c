use cedar_codegen::opcode::{
    cedar_opcodes, render_opcode_header, write_opcode_header, EncodingKind, OpcodeRegistry,
};
use std::fs;

fn sample_registry() -> OpcodeRegistry {
    let mut registry = OpcodeRegistry::new();
    registry.define("NOP", EncodingKind::NoArg, 0).unwrap();
    registry.define("NIL", EncodingKind::NoArg, 1).unwrap();
    registry.define("CONST", EncodingKind::ImmInt, 1).unwrap();
    registry
}

#[test]
fn test_sample_registry_renders_expected_header() {
    let header = render_opcode_header(&sample_registry()).unwrap();

    let expected: String = [
        "/* Auto-generated by cedar-codegen - do not edit manually. */",
        "#pragma once",
        "#ifndef __OPCODE_H",
        "#define __OPCODE_H",
        "",
        "/* Instruction opcodes for compiled code */",
        "#define OP_NOP                      0x00",
        "#define OP_NIL                      0x01",
        "#define OP_CONST                    0x02",
        "",
        "/* Instruction opcode foreach macro for code generation */",
        "/* Arg order: (name, bytecode, type, stack effect) */",
        "#define CEDAR_FOREACH_OPCODE(V) \\",
        "  V(NOP, OP_NOP, no_arg, 0) \\",
        "  V(NIL, OP_NIL, no_arg, 1) \\",
        "  V(CONST, OP_CONST, imm_int, 1)",
        "",
        "#endif",
        "",
    ]
    .join("\n");
    assert_eq!(header, expected);
}

#[test]
fn test_macro_table_continuations() {
    let header = render_opcode_header(&cedar_opcodes().unwrap()).unwrap();

    let macro_lines: Vec<&str> = header
        .lines()
        .filter(|line| line.trim_start().starts_with("V("))
        .collect();
    assert_eq!(macro_lines.len(), 14);

    // every invocation but the last carries a line continuation
    let (last, rest) = macro_lines.split_last().unwrap();
    for line in rest {
        assert!(line.ends_with(" \\"), "missing continuation: {:?}", line);
    }
    assert_eq!(*last, "  V(RETURN, OP_RETURN, no_arg, 0)");
    assert!(header.ends_with("#endif\n"));
}

#[test]
fn test_constant_values_are_contiguous_positions() {
    let mut registry = OpcodeRegistry::new();
    for i in 0..OpcodeRegistry::MAX_OPCODES {
        registry
            .define(&format!("T{}", i), EncodingKind::NoArg, 0)
            .unwrap();
    }

    let header = render_opcode_header(&registry).unwrap();
    let values: Vec<usize> = header
        .lines()
        .filter(|line| line.starts_with("#define OP_T"))
        .map(|line| {
            let hex = line.rsplit("0x").next().unwrap();
            usize::from_str_radix(hex, 16).unwrap()
        })
        .collect();

    // unique and contiguous from zero, in registry order
    assert_eq!(values, (0..OpcodeRegistry::MAX_OPCODES).collect::<Vec<_>>());
}

#[test]
fn test_builtin_table_header() {
    let header = render_opcode_header(&cedar_opcodes().unwrap()).unwrap();
    assert!(header.contains("#define OP_NOP                      0x00"));
    assert!(header.contains("#define OP_MAKE_FUNC                0x0b"));
    assert!(header.contains("#define OP_RETURN                   0x0d"));
    assert!(header.contains("  V(SET_LOCAL, OP_SET_LOCAL, imm_int, -1) \\"));
}

#[test]
fn test_rendering_is_deterministic() {
    let first = render_opcode_header(&cedar_opcodes().unwrap()).unwrap();
    let second = render_opcode_header(&cedar_opcodes().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_write_overwrites_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opcode.h");
    fs::write(&path, "stale header much longer than the generated one\n".repeat(40)).unwrap();

    write_opcode_header(&sample_registry(), &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("/* Auto-generated by cedar-codegen"));
    assert!(written.ends_with("#endif\n"));
    assert!(!written.contains("stale"));
}
