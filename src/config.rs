// File: src/config.rs
use crate::core::types::CultureTag;
use crate::error::Result;
use crate::fuzzy::scorer::{Scorer, DEFAULT_WORD_DELIMITERS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "translation-finder";
const DEFAULT_SUGGESTION_COUNT: usize = 8;

/// User settings, read from a JSON file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Where the translation store lives. `None` keeps everything in memory.
    pub store_path: Option<PathBuf>,
    pub suggestion_count: usize,
    pub default_culture: Option<CultureTag>,
    /// Characters that split a text into words when scoring.
    pub word_delimiters: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            default_culture: None,
            word_delimiters: DEFAULT_WORD_DELIMITERS.iter().collect(),
        }
    }
}

impl FinderConfig {
    /// A config with no store path, for hosts that manage persistence
    /// themselves and for tests.
    pub fn in_memory() -> Self {
        Self {
            store_path: None,
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Loads `path` if given, else the default config file if it exists,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn scorer(&self) -> Scorer {
        Scorer::with_delimiters(self.word_delimiters.chars())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
}

pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR).join("translations.bin"))
}
