//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared across the ISA, core, and engine:
//! 1. **Operand Types:** Strong types for register indices, memory addresses, and immediates.
//! 2. **Constants:** Default machine sizes and program capacity.
//! 3. **Access Classification:** Which operand field and which index space an access touches.
//! 4. **Error Handling:** Fault representations for the execution engine.
//! 5. **Register Management:** The bounds-checked register file.

/// Operand newtypes (register index, memory address, immediate).
pub mod addr;

/// Machine-wide constants.
pub mod constants;

/// Operand field and index space definitions.
pub mod data;

/// Fault types raised by the execution engine.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::{Addr, Imm, Reg};
pub use constants::{MEM_SIZE, PROG_SIZE, REG_COUNT};
pub use data::{Operand, Space};
pub use error::{Fault, FaultKind};
pub use reg::RegisterFile;
