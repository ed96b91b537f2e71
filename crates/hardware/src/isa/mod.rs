//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode set, the instruction record, operand decoding, and the
//! disassembler.
//!
//! # Instruction Set
//!
//! | Opcode | Mnemonic | `dst`    | `src_or_imm`     |
//! |--------|----------|----------|------------------|
//! | `0x00` | `nop`    | unused   | unused           |
//! | `0x01` | `mov`    | register | immediate        |
//! | `0x02` | `add`    | register | register         |
//! | `0x03` | `sub`    | register | register         |
//! | `0x04` | `store`  | register | memory address   |
//! | `0x05` | `hlt`    | unused   | unused           |

/// Operand decoding into typed operations.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction record and constructors.
pub mod instruction;

/// Opcode values and the closed opcode enum.
pub mod opcodes;

pub use decode::{Op, decode};
pub use instruction::Instruction;
pub use opcodes::Opcode;
