//! # Loader Tests

use minicpu_core::common::{FaultKind, PROG_SIZE};
use minicpu_core::isa::Instruction;
use minicpu_core::sim::{
    LoadError, Program, assemble_demo, load_program, parse_program, parse_program_json,
};
use minicpu_core::{MachineState, execute};
use std::io::Write;

#[test]
fn test_demo_program_contents() {
    let program = assemble_demo();
    assert_eq!(
        program.as_slice(),
        &[
            Instruction::mov(0, 10),
            Instruction::mov(1, 20),
            Instruction::add(0, 1),
            Instruction::store(0, 100),
            Instruction::hlt(),
        ]
    );
}

#[test]
fn test_parse_program_records() {
    let program = parse_program(&[0x01, 0, 10, 0x02, 0, 1, 0x05, 0, 0]).unwrap();
    assert_eq!(
        program,
        Program::new(vec![
            Instruction::mov(0, 10),
            Instruction::add(0, 1),
            Instruction::hlt(),
        ])
    );
}

#[test]
fn test_parse_empty_image() {
    assert!(parse_program(&[]).unwrap().is_empty());
}

#[test]
fn test_parse_rejects_partial_record() {
    let err = parse_program(&[0x01, 0, 10, 0x05]).unwrap_err();
    assert!(matches!(err, LoadError::Truncated { len: 4, record: 3 }));
}

#[test]
fn test_parse_rejects_oversized_program() {
    let image = vec![0u8; (PROG_SIZE + 1) * 3];
    let err = parse_program(&image).unwrap_err();
    assert!(matches!(err, LoadError::TooLong { count, limit } if count == PROG_SIZE + 1 && limit == PROG_SIZE));
}

#[test]
fn test_parse_accepts_full_capacity() {
    let image = vec![0u8; PROG_SIZE * 3];
    assert_eq!(parse_program(&image).unwrap().len(), PROG_SIZE);
}

#[test]
fn test_image_survives_write_and_reload() {
    let program = assemble_demo();
    assert_eq!(parse_program(&program.to_bytes()).unwrap(), program);
}

#[test]
fn test_unknown_opcode_loads_then_faults() {
    let program = parse_program(&[0x01, 0, 1, 0xEE, 0, 0]).unwrap();
    let mut state = MachineState::new();
    let fault = execute(&mut state, &program).unwrap_err();
    assert_eq!(fault.kind, FaultKind::InvalidOpcode(0xEE));
    assert_eq!(fault.pc, 1);
}

#[test]
fn test_parse_json_program() {
    let text = r#"[
        { "opcode": 1, "dst": 0, "src_or_imm": 5 },
        { "opcode": 3, "dst": 0, "src_or_imm": 0 },
        { "opcode": 5, "dst": 0, "src_or_imm": 0 }
    ]"#;
    let program = parse_program_json(text).unwrap();
    assert_eq!(
        program.as_slice(),
        &[Instruction::mov(0, 5), Instruction::sub(0, 0), Instruction::hlt()]
    );
}

#[test]
fn test_parse_json_rejects_garbage() {
    let err = parse_program_json("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn test_load_binary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&assemble_demo().to_bytes()).unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program, assemble_demo());
}

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let json = serde_json::to_string(&assemble_demo()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program, assemble_demo());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    let err = load_program(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.bin"));
}
