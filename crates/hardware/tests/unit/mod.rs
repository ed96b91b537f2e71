//! # Unit Components
//!
//! Organises the unit tests by the crate module they exercise.

/// Unit tests for shared types: register file, faults.
pub mod common;
