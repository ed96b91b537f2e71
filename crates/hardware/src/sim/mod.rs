//! Programs, program loading, and execution.
//!
//! A `Program` is built once by the loader and then handed, read-only, to the
//! `Engine` together with a fresh `MachineState`.

/// Fetch-decode-execute engine.
pub mod engine;

/// Program images and the built-in demo program.
pub mod loader;

/// Ordered instruction sequence.
pub mod program;

pub use engine::{Engine, Termination, execute};
pub use loader::{LoadError, assemble_demo, load_program, parse_program, parse_program_json};
pub use program::Program;
