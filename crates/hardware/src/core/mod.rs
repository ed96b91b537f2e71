//! Core machine model.
//!
//! This module contains the architectural state the execution engine mutates:
//! the register file, the zero flag, the program counter, and data memory.

/// Wrapping 8-bit arithmetic.
pub mod alu;

/// Machine state (registers, flags, program counter, memory).
pub mod machine;

/// Flat byte-addressable data memory.
pub mod memory;

pub use self::machine::MachineState;
pub use self::memory::Memory;
