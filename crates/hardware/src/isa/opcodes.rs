//! Opcodes.
//!
//! Defines the raw opcode bytes and the closed set of operations they name.

use std::fmt;

/// No operation.
pub const OP_NOP: u8 = 0x00;

/// Move immediate into register.
pub const OP_MOV: u8 = 0x01;

/// Register-register addition.
pub const OP_ADD: u8 = 0x02;

/// Register-register subtraction.
pub const OP_SUB: u8 = 0x03;

/// Store register to memory.
pub const OP_STORE: u8 = 0x04;

/// Halt.
pub const OP_HLT: u8 = 0x05;

/// Operation selector.
///
/// Exhaustive: any byte outside this set fails to convert and surfaces as an
/// invalid-opcode fault at dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// No state change.
    Nop = OP_NOP,
    /// `registers[dst] = imm`.
    Mov = OP_MOV,
    /// `registers[dst] += registers[src]`, wrapping; updates the zero flag.
    Add = OP_ADD,
    /// `registers[dst] -= registers[src]`, wrapping; updates the zero flag.
    Sub = OP_SUB,
    /// `memory[addr] = registers[dst]`.
    Store = OP_STORE,
    /// Stop execution.
    Hlt = OP_HLT,
}

impl Opcode {
    /// Every opcode, in encoding order.
    pub const ALL: [Self; 6] = [
        Self::Nop,
        Self::Mov,
        Self::Add,
        Self::Sub,
        Self::Store,
        Self::Hlt,
    ];

    /// Raw encoding of the opcode.
    #[inline(always)]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Mov => "mov",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Store => "store",
            Self::Hlt => "hlt",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Converts a raw byte, handing the byte back if it names no opcode.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            OP_NOP => Ok(Self::Nop),
            OP_MOV => Ok(Self::Mov),
            OP_ADD => Ok(Self::Add),
            OP_SUB => Ok(Self::Sub),
            OP_STORE => Ok(Self::Store),
            OP_HLT => Ok(Self::Hlt),
            other => Err(other),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.as_byte()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
