//! Instruction Disassembler.
//!
//! Converts an instruction record into a human-readable mnemonic string for debug
//! tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use minicpu_core::isa::Instruction;
//! use minicpu_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(&Instruction::add(0, 1)), "add r0, r1");
//! assert_eq!(disassemble(&Instruction::store(0, 100)), "store r0, [100]");
//! ```

use crate::isa::decode::{Op, decode};
use crate::isa::instruction::Instruction;

/// Disassembles one instruction.
///
/// Records with an unknown opcode render as a raw `.byte` directive so a trace still
/// shows what was loaded.
pub fn disassemble(inst: &Instruction) -> String {
    let Ok(op) = decode(inst) else {
        return format!(
            ".byte {:#04x}, {}, {}",
            inst.opcode_byte(),
            inst.dst(),
            inst.src_or_imm()
        );
    };

    let m = op.opcode().mnemonic();
    match op {
        Op::Nop | Op::Hlt => m.to_string(),
        Op::Mov { dst, imm } => format!("{m} {dst}, {imm}"),
        Op::Add { dst, src } | Op::Sub { dst, src } => format!("{m} {dst}, {src}"),
        Op::Store { src, addr } => format!("{m} {src}, {addr}"),
    }
}

/// Disassembles a whole program, one line per instruction prefixed by its index.
pub fn disassemble_all(program: &[Instruction]) -> Vec<String> {
    program
        .iter()
        .enumerate()
        .map(|(pc, inst)| format!("{pc:4}: {}", disassemble(inst)))
        .collect()
}
