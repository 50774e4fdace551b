use crate::card::DEFAULT_DATE_FORMAT;
use crate::error::{NotesError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "POCKETNOTES_HOME";

/// Configuration for pocketnotes, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Key the note collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// strftime-style format for card timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            date_format: default_date_format(),
        }
    }
}

/// Configuration keys settable from the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    StorageKey,
    DateFormat,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::StorageKey, ConfigKey::DateFormat];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "storage-key" => Some(ConfigKey::StorageKey),
            "date-format" => Some(ConfigKey::DateFormat),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::StorageKey => "storage-key",
            ConfigKey::DateFormat => "date-format",
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotesError::Serialization)?;
        fs::write(config_path, content).map_err(NotesError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::StorageKey => &self.storage_key,
            ConfigKey::DateFormat => &self.date_format,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(NotesError::Api(format!("{} cannot be empty", key.name())));
        }
        match key {
            ConfigKey::StorageKey => {
                if value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(NotesError::Api(format!("Invalid storage key: {}", value)));
                }
                self.storage_key = value.to_string();
            }
            ConfigKey::DateFormat => {
                if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
                    return Err(NotesError::Api(format!("Invalid date format: {}", value)));
                }
                self.date_format = value.to_string();
            }
        }
        Ok(())
    }
}

/// Where notes and config live: `$POCKETNOTES_HOME` if set, otherwise the
/// platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pocketnotes", "pocketnotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotesError::Store("Could not determine data directory".to_string()))
}
