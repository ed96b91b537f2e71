//! Configuration for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run:
//! 1. **Defaults:** Baseline machine dimensions.
//! 2. **Structures:** General options and machine dimensions.
//!
//! Configuration is supplied as JSON, or use `Config::default()`. Every field is
//! optional in the JSON form.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::common::constants::{MEM_SIZE, REG_COUNT};

/// Default configuration constants for the simulator.
mod defaults {
    use super::{MEM_SIZE, REG_COUNT};

    /// Number of general-purpose registers.
    pub const REGISTER_COUNT: usize = REG_COUNT;

    /// Size of data memory in bytes.
    pub const MEMORY_SIZE: usize = MEM_SIZE;
}

/// Errors raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for `Config`.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use minicpu_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.machine.register_count, 4);
///
/// let config = Config::from_json(r#"{ "machine": { "memory_size": 64 } }"#).unwrap();
/// assert_eq!(config.machine.memory_size, 64);
/// assert_eq!(config.machine.register_count, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine dimensions
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, or `ConfigError::Parse` if
    /// its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every dispatched instruction at trace level.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Machine dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Number of general-purpose registers.
    #[serde(default = "MachineConfig::default_register_count")]
    pub register_count: usize,

    /// Size of data memory in bytes.
    #[serde(default = "MachineConfig::default_memory_size")]
    pub memory_size: usize,
}

impl MachineConfig {
    const fn default_register_count() -> usize {
        defaults::REGISTER_COUNT
    }

    const fn default_memory_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            register_count: defaults::REGISTER_COUNT,
            memory_size: defaults::MEMORY_SIZE,
        }
    }
}
