//! Data Memory.
//!
//! A flat, fixed-size, byte-addressable buffer. Sized once at construction; every access
//! goes through a bounds check that reports a fault kind rather than panicking.

use serde::Serialize;

use crate::common::constants::MEM_SIZE;
use crate::common::data::{Operand, Space};
use crate::common::error::FaultKind;

/// Flat byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Size of the memory in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the memory has zero size.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Validates that `addr` lies inside the memory.
    ///
    /// # Errors
    ///
    /// Returns `FaultKind::IndexOutOfRange` tagged with `operand` if `addr >= len()`.
    #[inline]
    pub const fn check(&self, addr: usize, operand: Operand) -> Result<usize, FaultKind> {
        if addr < self.bytes.len() {
            Ok(addr)
        } else {
            Err(FaultKind::out_of_range(
                operand,
                Space::Memory,
                addr,
                self.bytes.len(),
            ))
        }
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns `FaultKind::IndexOutOfRange` if `addr` is past the end of memory.
    #[inline]
    pub fn read(&self, addr: usize, operand: Operand) -> Result<u8, FaultKind> {
        let addr = self.check(addr, operand)?;
        Ok(self.bytes[addr])
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns `FaultKind::IndexOutOfRange` if `addr` is past the end of memory; memory is
    /// left unchanged.
    #[inline]
    pub fn write(&mut self, addr: usize, operand: Operand, val: u8) -> Result<(), FaultKind> {
        let addr = self.check(addr, operand)?;
        self.bytes[addr] = val;
        Ok(())
    }

    /// Reads one byte without an operand tag, returning `None` when out of range.
    pub fn get(&self, addr: usize) -> Option<u8> {
        self.bytes.get(addr).copied()
    }

    /// The whole memory as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MEM_SIZE)
    }
}
