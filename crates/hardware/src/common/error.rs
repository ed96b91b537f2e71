//! Fault definitions.
//!
//! This module defines the error conditions that abort a run. It provides:
//! 1. **Fault Kinds:** Out-of-range operand indices and undecodable opcodes.
//! 2. **Fault Reports:** A fault kind paired with the program counter that raised it.
//! 3. **Error Handling:** Integration with `std::error::Error` via `thiserror`.
//!
//! Normal termination is not a fault; see [`Termination`](crate::sim::Termination).

use serde::Serialize;
use thiserror::Error;

use super::data::{Operand, Space};

/// Reason an instruction could not be executed.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// An operand index lies outside its fixed bound.
    ///
    /// Raised before the access, so nothing outside `[0, bound)` is ever touched.
    #[error("{operand} operand {index} out of range for {space} (size {bound})")]
    IndexOutOfRange {
        /// Instruction field that supplied the index.
        operand: Operand,
        /// Index space the operand was checked against.
        space: Space,
        /// The offending index.
        index: usize,
        /// Exclusive upper bound of the space.
        bound: usize,
    },

    /// The opcode byte is not a member of the instruction set.
    ///
    /// The associated value is the raw opcode byte.
    #[error("invalid opcode {0:#04x}")]
    InvalidOpcode(u8),
}

/// A fault together with the program counter of the offending instruction.
///
/// The machine state reflects the last instruction that completed; the program counter
/// still points at the faulting instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("fault at pc={pc}: {kind}")]
pub struct Fault {
    /// What went wrong.
    pub kind: FaultKind,
    /// Index of the instruction that raised the fault.
    pub pc: usize,
}

impl Fault {
    /// Creates a fault report for the instruction at `pc`.
    #[inline]
    pub const fn new(kind: FaultKind, pc: usize) -> Self {
        Self { kind, pc }
    }

    /// Returns true if the fault is an out-of-range access.
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self.kind, FaultKind::IndexOutOfRange { .. })
    }

    /// Returns true if the fault is an undecodable opcode.
    pub const fn is_invalid_opcode(&self) -> bool {
        matches!(self.kind, FaultKind::InvalidOpcode(_))
    }
}

impl FaultKind {
    /// Builds an out-of-range fault kind.
    #[inline]
    pub const fn out_of_range(operand: Operand, space: Space, index: usize, bound: usize) -> Self {
        Self::IndexOutOfRange {
            operand,
            space,
            index,
            bound,
        }
    }

    /// Attaches the program counter of the offending instruction.
    #[inline]
    pub const fn at(self, pc: usize) -> Fault {
        Fault::new(self, pc)
    }
}
