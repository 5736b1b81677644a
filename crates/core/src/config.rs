//! Generator tuning loaded from TOML.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Generous enough for Aldous-Broder and Wilson on the largest 91x91 grid.
pub const DEFAULT_STEP_BUDGET: u64 = 50_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Loop iterations one algorithm may run before it is treated as faulted.
    pub step_budget: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { step_budget: DEFAULT_STEP_BUDGET }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&raw)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "generator config I/O error: {err}"),
            Self::Parse(message) => write!(f, "invalid generator config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) => None,
        }
    }
}
