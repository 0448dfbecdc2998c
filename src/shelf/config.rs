use crate::error::{Result, ShelfError};
use crate::model::Locale;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_KEYS: [&str; 2] = ["data-file", "locale"];
pub const DEFAULT_DATA_FILENAME: &str = "books.json";

/// Configuration for shelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Backing file used when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Language for book labels
    #[serde(default)]
    pub locale: Locale,
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Write `config.json` into `config_dir`, creating the directory if needed.
    /// Returns the path written.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(&config_path, content).map_err(ShelfError::Io)?;
        debug!("Wrote config to {}", config_path.display());
        Ok(config_path)
    }

    /// Every known key with its current value, in display order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self
                .data_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "locale" => Ok(self.locale.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set `key` from its text form. An empty `data-file` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                self.data_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "locale" => self.locale = value.parse().map_err(ShelfError::InvalidInput)?,
            other => return Err(unknown_key(other)),
        }
        debug!("Config {} set to {:?}", key, value);
        Ok(())
    }

    /// Pick the backing file: explicit path, then config, then `<data_dir>/books.json`.
    pub fn resolve_data_file(&self, explicit: Option<PathBuf>, data_dir: &Path) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| data_dir.join(DEFAULT_DATA_FILENAME))
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::InvalidInput(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
