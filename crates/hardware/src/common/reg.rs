//! Register File.
//!
//! This module provides the `RegisterFile` struct, the machine's general-purpose storage.
//! It provides:
//! 1. **Storage:** A fixed number of 8-bit registers, sized at construction.
//! 2. **Bounds Checking:** Every read and write validates the index and reports a fault
//!    kind instead of panicking.
//! 3. **Observability:** Dumping register state for diagnostics.

use serde::Serialize;

use super::constants::REG_COUNT;
use super::data::{Operand, Space};
use super::error::FaultKind;

/// Fixed-size file of 8-bit general-purpose registers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegisterFile {
    regs: Vec<u8>,
}

impl RegisterFile {
    /// Creates a register file with `count` registers, all zero.
    pub fn new(count: usize) -> Self {
        Self {
            regs: vec![0; count],
        }
    }

    /// Number of registers; indices `0..len()` are valid.
    pub const fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns true if the file has no registers at all.
    pub const fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Validates that `idx` names a register.
    ///
    /// # Errors
    ///
    /// Returns `FaultKind::IndexOutOfRange` tagged with `operand` if `idx >= len()`.
    #[inline]
    pub const fn check(&self, idx: usize, operand: Operand) -> Result<usize, FaultKind> {
        if idx < self.regs.len() {
            Ok(idx)
        } else {
            Err(FaultKind::out_of_range(
                operand,
                Space::Register,
                idx,
                self.regs.len(),
            ))
        }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns `FaultKind::IndexOutOfRange` if `idx` is past the last register.
    #[inline]
    pub fn read(&self, idx: usize, operand: Operand) -> Result<u8, FaultKind> {
        let idx = self.check(idx, operand)?;
        Ok(self.regs[idx])
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns `FaultKind::IndexOutOfRange` if `idx` is past the last register; the file
    /// is left unchanged.
    #[inline]
    pub fn write(&mut self, idx: usize, operand: Operand, val: u8) -> Result<(), FaultKind> {
        let idx = self.check(idx, operand)?;
        self.regs[idx] = val;
        Ok(())
    }

    /// Reads a register without an operand tag, returning `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.regs.get(idx).copied()
    }

    /// All register values in index order.
    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            println!("R{i} = {val}");
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(REG_COUNT)
    }
}
