//! Machine State.
//!
//! This module defines the architectural state of the simulated machine. It holds:
//! 1. **Registers:** The bounds-checked register file.
//! 2. **Control:** The program counter and the zero flag.
//! 3. **Memory:** Flat data memory.
//!
//! A state is created zeroed before each run and owned by a single caller; the engine
//! borrows it mutably for the duration of the run.

use serde::Serialize;

use crate::common::constants::{MEM_SIZE, REG_COUNT};
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::memory::Memory;

/// Architectural state of one machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineState {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Index of the next instruction to fetch.
    pub pc: usize,
    /// Set when the most recent ADD or SUB produced zero.
    pub zero_flag: bool,
    /// Data memory.
    pub memory: Memory,
}

impl MachineState {
    /// Creates a zeroed state with the default dimensions (4 registers, 256 bytes).
    pub fn new() -> Self {
        Self::with_sizes(REG_COUNT, MEM_SIZE)
    }

    /// Creates a zeroed state with `reg_count` registers and `mem_size` bytes of memory.
    pub fn with_sizes(reg_count: usize, mem_size: usize) -> Self {
        Self {
            regs: RegisterFile::new(reg_count),
            pc: 0,
            zero_flag: false,
            memory: Memory::new(mem_size),
        }
    }

    /// Creates a zeroed state sized by the machine section of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_sizes(config.machine.register_count, config.machine.memory_size)
    }

    /// Register value at `idx`, or `None` if `idx` is out of range.
    pub fn reg(&self, idx: usize) -> Option<u8> {
        self.regs.get(idx)
    }

    /// Memory byte at `addr`, or `None` if `addr` is out of range.
    pub fn mem(&self, addr: usize) -> Option<u8> {
        self.memory.get(addr)
    }

    /// Prints the program counter, zero flag, and registers to stdout.
    pub fn dump_state(&self) {
        println!("PC = {}", self.pc);
        println!("Z  = {}", u8::from(self.zero_flag));
        self.regs.dump();
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
