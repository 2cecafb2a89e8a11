//! User configuration
//!
//! Stored as JSON in `~/.config/wordtrie/config.json` (platform config dir).
//! Every field is optional in the file; missing fields take their defaults.

use crate::store::DEFAULT_COMPRESSION_LEVEL;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings shared by the CLI commands
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// zstd level used when writing an index
    pub compression_level: i32,
    /// Index file used when none is given on the command line
    pub index_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            index_path: PathBuf::from("words.trie.zst"),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordtrie").join("config.json"))
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Config::default()),
        }
    }

    /// Load from an explicit file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let range = zstd::compression_level_range();
        if !range.contains(&self.compression_level) {
            return Err(Error::Config(format!(
                "compression_level {} outside {:?}",
                self.compression_level, range
            )));
        }
        Ok(())
    }
}
