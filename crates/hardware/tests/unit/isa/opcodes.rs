//! # Opcode Tests

use minicpu_core::isa::Opcode;
use minicpu_core::isa::opcodes::{OP_ADD, OP_HLT, OP_MOV, OP_NOP, OP_STORE, OP_SUB};
use proptest::prelude::*;

#[test]
fn test_encoding_order_matches_declaration() {
    assert_eq!(
        [OP_NOP, OP_MOV, OP_ADD, OP_SUB, OP_STORE, OP_HLT],
        [0, 1, 2, 3, 4, 5]
    );
    for (i, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(op.as_byte() as usize, i);
    }
}

#[test]
fn test_every_opcode_converts_back() {
    for op in Opcode::ALL {
        assert_eq!(Opcode::try_from(u8::from(op)), Ok(op));
    }
}

#[test]
fn test_mnemonics() {
    let names: Vec<_> = Opcode::ALL.iter().map(|op| op.to_string()).collect();
    assert_eq!(names, ["nop", "mov", "add", "sub", "store", "hlt"]);
}

proptest! {
    #[test]
    fn test_bytes_outside_set_are_rejected(byte in 6u8..=255) {
        prop_assert_eq!(Opcode::try_from(byte), Err(byte));
    }
}
