//! Optional YAML configuration.
//!
//! A config file can switch individual checks off; it can never add checks
//! or reorder them. Absent config means the full registry runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::check::{self, Check};

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["stylegate.yaml", ".stylegate.yaml"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Registry names of checks to leave out of the run.
    #[serde(default)]
    pub disabled_checks: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The registry with disabled checks filtered out, order preserved.
    pub fn enabled_checks(&self) -> Vec<&'static dyn Check> {
        check::registry()
            .into_iter()
            .filter(|c| !self.disabled_checks.iter().any(|d| d == c.name()))
            .collect()
    }
}

/// Configuration problems worth a typed error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown check {0:?} in disabled_checks")]
    UnknownCheck(String),
    #[error("every check is disabled; nothing would run")]
    NothingEnabled,
}

/// Validate a parsed config against the registry.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    for name in &config.disabled_checks {
        if !check::is_known(name) {
            return Err(ConfigError::UnknownCheck(name.clone()));
        }
    }
    if config.enabled_checks().is_empty() {
        return Err(ConfigError::NothingEnabled);
    }
    Ok(())
}

/// Look for a config file next to the scanned project.
pub fn discover(root: &Path) -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = root.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
