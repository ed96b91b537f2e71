//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the simulated machine:
//! 1. **Register File:** Number of general-purpose registers.
//! 2. **Memory:** Size of the flat byte-addressable memory.
//! 3. **Programs:** Maximum program length and on-disk record size.

/// Default number of general-purpose registers (`R0`-`R3`).
pub const REG_COUNT: usize = 4;

/// Default size of data memory in bytes.
///
/// Every 8-bit address operand is in range for a memory of this size.
pub const MEM_SIZE: usize = 256;

/// Maximum number of instructions a loaded program may contain.
pub const PROG_SIZE: usize = 256;

/// Size of one encoded instruction record in bytes (`opcode`, `dst`, `src_or_imm`).
pub const INSTRUCTION_SIZE: usize = 3;

/// Bit width of a register; arithmetic wraps modulo `2^REGISTER_BITS`.
pub const REGISTER_BITS: u32 = u8::BITS;

/// Memory cell reported by the command-line runner after a run.
pub const REPORT_ADDR: usize = 100;
