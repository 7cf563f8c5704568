//! CPU configuration loaded from TOML.
//!
//! ```toml
//! apple2 = "apple_ii_plus"   # machine type, used to pick the default CPU
//! model = "65C02"            # optional explicit override
//! run_mode = "debug"         # running | benchmark | stepping | debug
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Apple2Model, CpuType, RunMode};

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Machine-level CPU settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Explicit main CPU. When absent the CPU is probed from `apple2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<CpuType>,

    /// Emulated machine type
    pub apple2: Apple2Model,

    /// Emulator run mode
    pub run_mode: RunMode,
}

impl CpuConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    ///
    /// ```
    /// use a2cpu::{CpuConfig, CpuType, RunMode};
    ///
    /// let config = CpuConfig::from_toml_str("apple2 = \"apple_ii_plus\"").unwrap();
    /// assert_eq!(config.main_cpu(), CpuType::Mos6502);
    /// assert_eq!(config.run_mode, RunMode::Running);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The main CPU this configuration selects.
    ///
    /// A `Z80` override is not a valid main CPU and falls back to probing.
    pub fn main_cpu(&self) -> CpuType {
        match self.model {
            Some(model) if model != CpuType::Z80 => model,
            _ => CpuType::default_for(self.apple2),
        }
    }
}
