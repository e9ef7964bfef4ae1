//! Linehaul configuration.
//!
//! Loaded from `~/.linehaul/config.toml`. Every key is optional and the
//! file itself may be absent; defaults apply either way.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Linehaul configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Where trip databases are stored.
    /// Defaults to `~/.linehaul/trips/` when unset.
    pub storage_root: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.linehaul/config.toml`, or defaults if the file
    /// is missing. An unreadable or invalid file is an error.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.linehaul/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".linehaul").join("config.toml"))
    }
}
