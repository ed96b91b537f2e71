//! Instruction records.
//!
//! An instruction is three bytes: an opcode and two operand fields. The record is
//! stored exactly as loaded, so an opcode byte outside the instruction set can exist
//! in a program and is only rejected when the engine decodes it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::disasm;
use crate::isa::opcodes::Opcode;

/// One encoded instruction.
///
/// Immutable once built: fields are private and the type is `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    opcode: u8,
    dst: u8,
    src_or_imm: u8,
}

impl Instruction {
    /// Builds an instruction from a known opcode.
    #[inline]
    pub const fn new(opcode: Opcode, dst: u8, src_or_imm: u8) -> Self {
        Self::from_raw(opcode.as_byte(), dst, src_or_imm)
    }

    /// Builds an instruction from raw bytes; the opcode is not validated.
    #[inline]
    pub const fn from_raw(opcode: u8, dst: u8, src_or_imm: u8) -> Self {
        Self {
            opcode,
            dst,
            src_or_imm,
        }
    }

    /// `nop`
    pub const fn nop() -> Self {
        Self::new(Opcode::Nop, 0, 0)
    }

    /// `mov rD, imm`
    pub const fn mov(dst: u8, imm: u8) -> Self {
        Self::new(Opcode::Mov, dst, imm)
    }

    /// `add rD, rS`
    pub const fn add(dst: u8, src: u8) -> Self {
        Self::new(Opcode::Add, dst, src)
    }

    /// `sub rD, rS`
    pub const fn sub(dst: u8, src: u8) -> Self {
        Self::new(Opcode::Sub, dst, src)
    }

    /// `store rD, [addr]`
    pub const fn store(src: u8, addr: u8) -> Self {
        Self::new(Opcode::Store, src, addr)
    }

    /// `hlt`
    pub const fn hlt() -> Self {
        Self::new(Opcode::Hlt, 0, 0)
    }

    /// Raw opcode byte.
    #[inline(always)]
    pub const fn opcode_byte(&self) -> u8 {
        self.opcode
    }

    /// Decoded opcode, or the raw byte if it names no operation.
    ///
    /// # Errors
    ///
    /// Returns the raw byte when it is outside the instruction set.
    #[inline]
    pub fn opcode(&self) -> Result<Opcode, u8> {
        Opcode::try_from(self.opcode)
    }

    /// The `dst` field.
    #[inline(always)]
    pub const fn dst(&self) -> u8 {
        self.dst
    }

    /// The `src_or_imm` field.
    #[inline(always)]
    pub const fn src_or_imm(&self) -> u8 {
        self.src_or_imm
    }

    /// Encodes the record as `[opcode, dst, src_or_imm]`.
    pub const fn to_bytes(self) -> [u8; INSTRUCTION_SIZE] {
        [self.opcode, self.dst, self.src_or_imm]
    }

    /// Decodes a record from `[opcode, dst, src_or_imm]`.
    pub const fn from_bytes(bytes: [u8; INSTRUCTION_SIZE]) -> Self {
        Self::from_raw(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disasm::disassemble(self))
    }
}
