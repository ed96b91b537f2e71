//! Program Loader.
//!
//! This module turns external program representations into a `Program`. It provides:
//! 1. **Demo program:** The built-in fixed program (`R0 = 10 + 20`, stored to `[100]`).
//! 2. **Binary images:** Flat files of 3-byte `(opcode, dst, src_or_imm)` records.
//! 3. **JSON programs:** Arrays of `{ "opcode", "dst", "src_or_imm" }` objects, selected
//!    by a `.json` extension.
//!
//! Opcode bytes are not validated at load time; an unknown opcode faults when executed.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::common::constants::{INSTRUCTION_SIZE, PROG_SIZE};
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;

/// Errors raised while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The image does not split into whole instruction records.
    #[error("program image is {len} bytes, not a multiple of the {record}-byte record size")]
    Truncated {
        /// Image length in bytes.
        len: usize,
        /// Record size in bytes.
        record: usize,
    },

    /// The program holds more instructions than the machine accepts.
    #[error("program has {count} instructions, limit is {limit}")]
    TooLong {
        /// Number of instructions found.
        count: usize,
        /// Maximum program length.
        limit: usize,
    },

    /// A JSON program could not be parsed.
    #[error("invalid JSON program: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds the built-in demo program.
///
/// ```text
/// mov   r0, 10
/// mov   r1, 20
/// add   r0, r1
/// store r0, [100]
/// hlt
/// ```
pub fn assemble_demo() -> Program {
    Program::new(vec![
        Instruction::mov(0, 10),
        Instruction::mov(1, 20),
        Instruction::add(0, 1),
        Instruction::store(0, 100),
        Instruction::hlt(),
    ])
}

/// Parses a flat binary image of 3-byte records.
///
/// # Errors
///
/// Returns `LoadError::Truncated` if the length is not a multiple of the record size,
/// or `LoadError::TooLong` if the image holds more than `PROG_SIZE` instructions.
pub fn parse_program(bytes: &[u8]) -> Result<Program, LoadError> {
    let chunks = bytes.chunks_exact(INSTRUCTION_SIZE);
    if !chunks.remainder().is_empty() {
        return Err(LoadError::Truncated {
            len: bytes.len(),
            record: INSTRUCTION_SIZE,
        });
    }
    check_len(chunks.len())?;

    Ok(chunks
        .map(|rec| Instruction::from_raw(rec[0], rec[1], rec[2]))
        .collect())
}

/// Parses a JSON array of instruction records.
///
/// # Errors
///
/// Returns `LoadError::Json` on malformed input, or `LoadError::TooLong` if the
/// program holds more than `PROG_SIZE` instructions.
pub fn parse_program_json(text: &str) -> Result<Program, LoadError> {
    let program: Program = serde_json::from_str(text)?;
    check_len(program.len())?;
    Ok(program)
}

/// Reads a program from disk.
///
/// Files with a `.json` extension are parsed as JSON; anything else is a binary image.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise any error from
/// [`parse_program`] or [`parse_program_json`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let program = if path.extension().is_some_and(|ext| ext == "json") {
        parse_program_json(&fs::read_to_string(path).map_err(io_err)?)?
    } else {
        parse_program(&fs::read(path).map_err(io_err)?)?
    };
    tracing::debug!(path = %path.display(), instructions = program.len(), "loaded program");
    Ok(program)
}

const fn check_len(count: usize) -> Result<(), LoadError> {
    if count > PROG_SIZE {
        Err(LoadError::TooLong {
            count,
            limit: PROG_SIZE,
        })
    } else {
        Ok(())
    }
}
