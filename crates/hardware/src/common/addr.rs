//! Operand types.
//!
//! The second operand of an instruction means different things depending on the
//! opcode. These newtypes make the interpretation explicit after decode:
//! 1. **Registers:** `Reg` selects a slot of the register file.
//! 2. **Addresses:** `Addr` selects a byte of data memory.
//! 3. **Immediates:** `Imm` is a literal value written as-is.

use std::fmt;

/// A register index operand.
///
/// Not validated on construction; the register file checks the bound on access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(pub u8);

/// A data memory address operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u8);

/// An immediate literal operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Imm(pub u8);

impl Reg {
    /// Returns the register index as a `usize` for table lookups.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Addr {
    /// Returns the address as a `usize` for memory lookups.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Imm {
    /// Returns the raw literal value.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl fmt::Display for Imm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
