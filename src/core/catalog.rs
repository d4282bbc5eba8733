// src/core/catalog.rs
use crate::core::ranking;
use crate::core::types::{CultureTag, RankedTranslation, Translation};
use crate::core::validation::validate_key;
use crate::error::{FinderError, Result};
use crate::fuzzy::Scorer;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// An immutable snapshot of every translation for one culture, in load order.
/// Cloning shares the entries; edits build a new snapshot so readers ranking
/// against an older one are never disturbed.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationCatalog {
    culture: CultureTag,
    entries: Arc<Vec<Translation>>,
    duplicate_keys: Arc<Vec<String>>,
}

impl TranslationCatalog {
    pub fn empty(culture: CultureTag) -> Self {
        Self::from_translations(culture, Vec::new())
    }

    /// Builds a catalog from `(key, text)` pairs. Duplicate keys are kept
    /// and reported by [`duplicate_keys`](Self::duplicate_keys).
    pub fn from_entries<K, T>(culture: CultureTag, pairs: impl IntoIterator<Item = (K, T)>) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, text)| Translation::new(key, text, culture.clone()))
            .collect();
        Self::from_translations(culture, entries)
    }

    fn from_translations(culture: CultureTag, entries: Vec<Translation>) -> Self {
        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                duplicates.insert(entry.key.clone());
            }
        }
        if !duplicates.is_empty() {
            tracing::warn!(
                culture = %culture,
                keys = ?duplicates,
                "duplicated translation keys found; resolve them before editing"
            );
        }
        Self {
            culture,
            entries: Arc::new(entries),
            duplicate_keys: Arc::new(duplicates.into_iter().collect()),
        }
    }

    pub fn culture(&self) -> &CultureTag {
        &self.culture
    }

    pub fn entries(&self) -> &[Translation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that occur more than once, sorted, each listed once.
    pub fn duplicate_keys(&self) -> &[String] {
        &self.duplicate_keys
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|t| t.key == key)
    }

    /// First entry with `key`.
    pub fn get(&self, key: &str) -> Option<&Translation> {
        self.entries.iter().find(|t| t.key == key)
    }

    pub fn with_added(&self, key: &str, text: &str) -> Result<Self> {
        validate_key(key).map_err(|reason| FinderError::InvalidKey {
            key: key.to_string(),
            reason,
        })?;
        if self.contains_key(key) {
            return Err(FinderError::KeyExists(key.to_string()));
        }
        let mut entries = self.entries.as_ref().clone();
        entries.push(Translation::new(key, text, self.culture.clone()));
        Ok(Self::from_translations(self.culture.clone(), entries))
    }

    /// Replaces the first entry keyed `original_key` in place.
    pub fn with_updated(&self, original_key: &str, new_key: &str, new_text: &str) -> Result<Self> {
        validate_key(new_key).map_err(|reason| FinderError::InvalidKey {
            key: new_key.to_string(),
            reason,
        })?;
        let position = self
            .entries
            .iter()
            .position(|t| t.key == original_key)
            .ok_or_else(|| FinderError::KeyNotFound(original_key.to_string()))?;
        if new_key != original_key && self.contains_key(new_key) {
            return Err(FinderError::KeyExists(new_key.to_string()));
        }
        let mut entries = self.entries.as_ref().clone();
        entries[position] = Translation::new(new_key, new_text, self.culture.clone());
        Ok(Self::from_translations(self.culture.clone(), entries))
    }

    pub fn rank(&self, scorer: &Scorer, query: &str) -> Vec<RankedTranslation> {
        ranking::rank_scored(scorer, query, &self.entries)
    }

    pub fn closest(&self, scorer: &Scorer, query: &str, count: usize) -> Vec<RankedTranslation> {
        ranking::closest(scorer, query, &self.entries, count)
    }
}
