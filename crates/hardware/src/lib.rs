//! Minimal register-machine simulator library.
//!
//! This crate implements a deterministic interpreter for a six-instruction 8-bit machine:
//! 1. **ISA:** Instruction encoding, opcode set, operand decoding, and disassembly.
//! 2. **Core:** Machine state (register file, zero flag, program counter, flat memory).
//! 3. **Simulation:** Program container, loader, and the fetch-decode-execute engine.
//! 4. **Support:** Configuration and per-run statistics.

/// Common types and constants (operand newtypes, sizes, faults, register file).
pub mod common;
/// Simulator configuration (machine sizes, tracing).
pub mod config;
/// Machine state (registers, memory, flags, program counter).
pub mod core;
/// Instruction set (opcodes, instruction records, decode, disassembly).
pub mod isa;
/// Programs, loader, and execution engine.
pub mod sim;
/// Per-run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Machine state type; construct with `MachineState::new` or `MachineState::from_config`.
pub use crate::core::MachineState;
/// Single instruction record.
pub use crate::isa::Instruction;
/// Engine entry points and run outcome.
pub use crate::sim::{Engine, Program, Termination, execute};
