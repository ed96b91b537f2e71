//! # Disassembler Tests

use minicpu_core::isa::Instruction;
use minicpu_core::isa::disasm::{disassemble, disassemble_all};
use minicpu_core::sim::assemble_demo;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Instruction::nop(), "nop")]
#[case(Instruction::mov(0, 10), "mov r0, 10")]
#[case(Instruction::add(0, 1), "add r0, r1")]
#[case(Instruction::sub(2, 3), "sub r2, r3")]
#[case(Instruction::store(0, 100), "store r0, [100]")]
#[case(Instruction::hlt(), "hlt")]
#[case(Instruction::from_raw(0x09, 1, 2), ".byte 0x09, 1, 2")]
fn test_disassemble(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(disassemble(&inst), text);
    assert_eq!(inst.to_string(), text);
}

#[test]
fn test_disassemble_demo_listing() {
    let listing = disassemble_all(assemble_demo().as_slice());
    assert_eq!(
        listing,
        vec![
            "   0: mov r0, 10",
            "   1: mov r1, 20",
            "   2: add r0, r1",
            "   3: store r0, [100]",
            "   4: hlt",
        ]
    );
}
