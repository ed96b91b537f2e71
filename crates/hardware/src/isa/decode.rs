//! Instruction Decoder.
//!
//! Turns a raw instruction record into an `Op`, fixing per opcode how the
//! `src_or_imm` field is read: as an immediate (`mov`), a register (`add`, `sub`),
//! or a memory address (`store`). Operand bounds are not checked here; the engine
//! checks them against the machine it runs on.

use crate::common::addr::{Addr, Imm, Reg};
use crate::common::error::FaultKind;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::Opcode;

/// A decoded operation with typed operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// No state change.
    Nop,
    /// Load an immediate into a register.
    Mov {
        /// Destination register (`dst` field).
        dst: Reg,
        /// Literal value (`src_or_imm` field).
        imm: Imm,
    },
    /// Wrapping register addition.
    Add {
        /// Destination and left operand (`dst` field).
        dst: Reg,
        /// Right operand (`src_or_imm` field).
        src: Reg,
    },
    /// Wrapping register subtraction.
    Sub {
        /// Destination and left operand (`dst` field).
        dst: Reg,
        /// Right operand (`src_or_imm` field).
        src: Reg,
    },
    /// Store a register to memory.
    Store {
        /// Register whose value is stored (`dst` field).
        src: Reg,
        /// Target address (`src_or_imm` field).
        addr: Addr,
    },
    /// Stop execution.
    Hlt,
}

/// Decodes an instruction record.
///
/// # Errors
///
/// Returns `FaultKind::InvalidOpcode` if the opcode byte is not in the instruction set.
pub fn decode(inst: &Instruction) -> Result<Op, FaultKind> {
    let opcode = inst.opcode().map_err(FaultKind::InvalidOpcode)?;
    let dst = inst.dst();
    let operand = inst.src_or_imm();

    Ok(match opcode {
        Opcode::Nop => Op::Nop,
        Opcode::Mov => Op::Mov {
            dst: Reg(dst),
            imm: Imm(operand),
        },
        Opcode::Add => Op::Add {
            dst: Reg(dst),
            src: Reg(operand),
        },
        Opcode::Sub => Op::Sub {
            dst: Reg(dst),
            src: Reg(operand),
        },
        Opcode::Store => Op::Store {
            src: Reg(dst),
            addr: Addr(operand),
        },
        Opcode::Hlt => Op::Hlt,
    })
}

impl Op {
    /// The opcode this operation was decoded from.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Nop => Opcode::Nop,
            Self::Mov { .. } => Opcode::Mov,
            Self::Add { .. } => Opcode::Add,
            Self::Sub { .. } => Opcode::Sub,
            Self::Store { .. } => Opcode::Store,
            Self::Hlt => Opcode::Hlt,
        }
    }
}
