//! # Program Tests

use minicpu_core::isa::Instruction;
use minicpu_core::sim::Program;

#[test]
fn test_program_indexed_access() {
    let program = Program::new(vec![Instruction::mov(0, 1), Instruction::hlt()]);
    assert_eq!(program.len(), 2);
    assert!(!program.is_empty());
    assert_eq!(program.get(0), Some(&Instruction::mov(0, 1)));
    assert_eq!(program.get(1), Some(&Instruction::hlt()));
    assert_eq!(program.get(2), None);
    assert_eq!(program.get(usize::MAX), None);
}

#[test]
fn test_program_default_is_empty() {
    let program = Program::default();
    assert!(program.is_empty());
    assert_eq!(program.get(0), None);
}

#[test]
fn test_program_collects_and_iterates_in_order() {
    let program: Program = (0..3).map(|i| Instruction::mov(0, i)).collect();
    let values: Vec<u8> = program.iter().map(Instruction::src_or_imm).collect();
    assert_eq!(values, [0, 1, 2]);

    let mut count = 0;
    for _ in &program {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_program_to_bytes() {
    let program = Program::from(vec![Instruction::mov(1, 20), Instruction::hlt()]);
    assert_eq!(program.to_bytes(), vec![0x01, 1, 20, 0x05, 0, 0]);
}
