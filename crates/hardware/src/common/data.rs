//! Access Classification.
//!
//! Every bounds-checked access is tagged with the instruction field that supplied the
//! index and the index space it was checked against. Faults carry both so a report can
//! say exactly which operand was wrong.

use serde::Serialize;
use std::fmt;

/// Instruction field that supplied an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// The `dst` field.
    Dst,
    /// The `src_or_imm` field.
    SrcOrImm,
}

/// Index space an access is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Space {
    /// The register file, bounded by the register count.
    Register,
    /// Data memory, bounded by the memory size.
    Memory,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dst => write!(f, "dst"),
            Self::SrcOrImm => write!(f, "src_or_imm"),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => write!(f, "register"),
            Self::Memory => write!(f, "memory"),
        }
    }
}
