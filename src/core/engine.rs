use crate::config::FinderConfig;
use crate::core::store::TranslationStore;
use crate::core::types::{CultureTag, RankedTranslation};
use crate::error::{FinderError, Result};
use crate::fuzzy::Scorer;
use crate::persistence::{import_json, load_from_disk, save_to_disk};
use std::path::{Path, PathBuf};

// The engine is an ordinary value owned by its caller; nothing is global, so
// two engines bound to different stores never interfere.
pub struct FinderEngine {
    store: TranslationStore,
    scorer: Scorer,
    config: FinderConfig,
    store_path: Option<PathBuf>,
}

impl FinderEngine {
    pub fn new(config: FinderConfig) -> Self {
        Self::from_store(TranslationStore::new(), config)
    }

    pub fn from_store(store: TranslationStore, config: FinderConfig) -> Self {
        Self {
            store,
            scorer: config.scorer(),
            store_path: config.store_path.clone(),
            config,
        }
    }

    /// Loads the store at `path`, or starts empty when there is no file yet.
    /// A file that exists but cannot be read is an error.
    pub fn open(path: &Path, config: FinderConfig) -> Result<Self> {
        let store = if path.exists() {
            load_from_disk(path)?
        } else {
            tracing::info!(path = %path.display(), "no store yet, starting empty");
            TranslationStore::new()
        };
        let mut engine = Self::from_store(store, config);
        engine.store_path = Some(path.to_path_buf());
        Ok(engine)
    }

    /// Opens the store named by the config, if any.
    pub fn from_config(config: FinderConfig) -> Result<Self> {
        match config.store_path.clone() {
            Some(path) => Self::open(&path, config),
            None => Ok(Self::new(config)),
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Culture used when the caller has not picked one: the configured
    /// default, else the first loaded culture.
    pub fn default_culture(&self) -> Option<CultureTag> {
        self.config
            .default_culture
            .clone()
            .filter(|c| self.store.catalog(c).is_some())
            .or_else(|| self.store.cultures().next().cloned())
    }

    pub fn get_suggestions(
        &self,
        culture: &CultureTag,
        query: &str,
        count: usize,
    ) -> Result<Vec<RankedTranslation>> {
        let catalog = self
            .store
            .catalog(culture)
            .ok_or_else(|| FinderError::UnknownCulture(culture.as_str().to_string()))?;
        Ok(catalog.closest(&self.scorer, query, count))
    }

    pub fn key_exists(&self, culture: &CultureTag, key: &str) -> Result<bool> {
        self.store.key_exists(culture, key)
    }

    pub fn add_translation(&mut self, culture: &CultureTag, key: &str, text: &str) -> Result<()> {
        self.store.add_translation(culture, key, text)?;
        tracing::info!(culture = %culture, key, "translation added");
        Ok(())
    }

    pub fn update_translation(
        &mut self,
        culture: &CultureTag,
        original_key: &str,
        new_key: &str,
        new_text: &str,
    ) -> Result<()> {
        self.store
            .update_translation(culture, original_key, new_key, new_text)?;
        tracing::info!(culture = %culture, original_key, new_key, "translation updated");
        Ok(())
    }

    /// Replaces (or adds) one culture from a JSON interchange file.
    pub fn import_catalog(&mut self, path: &Path) -> Result<CultureTag> {
        let catalog = import_json(path)?;
        let culture = catalog.culture().clone();
        tracing::info!(culture = %culture, entries = catalog.len(), "catalog imported");
        self.store.insert_catalog(catalog);
        Ok(culture)
    }

    /// Drops the in-memory snapshot and re-reads the store file.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.store_path {
            self.store = if path.exists() {
                load_from_disk(path)?
            } else {
                TranslationStore::new()
            };
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.store_path {
            save_to_disk(&self.store, path)
        } else {
            Ok(()) // Nothing to do without a path
        }
    }
}
