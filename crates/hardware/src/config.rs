//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline values applied when a field is absent.
//! 2. **Structures:** Sectioned config for general behaviour and CPU details.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every section and field is optional in JSON; use `Config::default()` for a
//! quiet simulator with `MULT` writing `$t0`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::DEFAULT_MULT_DESTINATION;
use crate::common::{Register, Result};

/// Error raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    /// The contents are not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root simulator configuration.
///
/// # Example
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "cpu": { "mult_destination": "$v0" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(!config.general.echo_output);
/// assert_eq!(config.cpu.mult_destination, "$v0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// CPU behaviour settings.
    #[serde(default)]
    pub cpu: CpuConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or unknown value types.
    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `debug` tracing event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Also write each `PRINT`/`PRINTS` line to stdout as it is emitted.
    #[serde(default)]
    pub echo_output: bool,
}

/// CPU behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CpuConfig {
    /// Register receiving the product of `MULT`.
    #[serde(default = "CpuConfig::default_mult_destination")]
    pub mult_destination: String,
}

impl CpuConfig {
    /// Returns the default MULT destination name.
    fn default_mult_destination() -> String {
        DEFAULT_MULT_DESTINATION.to_string()
    }

    /// Resolves the configured MULT destination.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`](crate::common::SimError::UnknownRegister)
    /// if the name is not a register.
    pub fn mult_destination_register(&self) -> Result<Register> {
        Register::from_name(&self.mult_destination)
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            mult_destination: Self::default_mult_destination(),
        }
    }
}
