// src/core/store.rs
use crate::core::catalog::TranslationCatalog;
use crate::core::types::CultureTag;
use crate::error::{FinderError, Result};
use std::collections::BTreeMap;

/// Every loaded culture of one resource set. Adding a key to one culture
/// adds an empty placeholder to the others, so new keys stay paired the way
/// resource dictionaries are. Updates touch only the given culture: renaming
/// a key leaves the old key in the other cultures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationStore {
    catalogs: BTreeMap<CultureTag, TranslationCatalog>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cultures(&self) -> impl Iterator<Item = &CultureTag> {
        self.catalogs.keys()
    }

    pub fn catalogs(&self) -> impl Iterator<Item = &TranslationCatalog> {
        self.catalogs.values()
    }

    pub fn catalog(&self, culture: &CultureTag) -> Option<&TranslationCatalog> {
        self.catalogs.get(culture)
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Inserts or replaces the catalog for its culture.
    pub fn insert_catalog(&mut self, catalog: TranslationCatalog) {
        self.catalogs.insert(catalog.culture().clone(), catalog);
    }

    pub fn key_exists(&self, culture: &CultureTag, key: &str) -> Result<bool> {
        Ok(self.require(culture)?.contains_key(key))
    }

    pub fn add_translation(&mut self, culture: &CultureTag, key: &str, text: &str) -> Result<()> {
        let updated = self.require(culture)?.with_added(key, text)?;
        let mut placeholders = Vec::new();
        for (tag, catalog) in &self.catalogs {
            if tag != culture && !catalog.contains_key(key) {
                placeholders.push(catalog.with_added(key, "")?);
            }
        }
        self.insert_catalog(updated);
        for catalog in placeholders {
            self.insert_catalog(catalog);
        }
        Ok(())
    }

    pub fn update_translation(
        &mut self,
        culture: &CultureTag,
        original_key: &str,
        new_key: &str,
        new_text: &str,
    ) -> Result<()> {
        let updated = self.require(culture)?.with_updated(original_key, new_key, new_text)?;
        self.insert_catalog(updated);
        Ok(())
    }

    fn require(&self, culture: &CultureTag) -> Result<&TranslationCatalog> {
        self.catalogs
            .get(culture)
            .ok_or_else(|| FinderError::UnknownCulture(culture.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(raw: &str) -> CultureTag {
        CultureTag::parse(raw).unwrap()
    }

    fn two_cultures() -> TranslationStore {
        let mut store = TranslationStore::new();
        store.insert_catalog(TranslationCatalog::from_entries(
            CultureTag::neutral(),
            [("Save", "Save"), ("Open", "Open")],
        ));
        store.insert_catalog(TranslationCatalog::from_entries(tag("pl"), [("Save", "Zapisz")]));
        store
    }

    #[test]
    fn add_pairs_key_across_cultures() {
        let mut store = two_cultures();
        store.add_translation(&tag("pl"), "Close", "Zamknij").unwrap();
        let pl = store.catalog(&tag("pl")).unwrap();
        let neutral = store.catalog(&CultureTag::neutral()).unwrap();
        assert_eq!(pl.get("Close").unwrap().text, "Zamknij");
        assert_eq!(neutral.get("Close").unwrap().text, "");
        assert!(store.key_exists(&CultureTag::neutral(), "Close").unwrap());
    }

    #[test]
    fn add_keeps_existing_text_in_other_cultures() {
        let mut store = two_cultures();
        store.add_translation(&tag("pl"), "Open", "Otwórz").unwrap();
        assert_eq!(store.catalog(&CultureTag::neutral()).unwrap().get("Open").unwrap().text, "Open");
    }

    #[test]
    fn failed_add_changes_nothing() {
        let mut store = two_cultures();
        let before = store.clone();
        assert!(store.add_translation(&tag("pl"), "Save", "x").is_err());
        assert!(store.add_translation(&tag("pl"), "not valid", "x").is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn unknown_culture() {
        let mut store = two_cultures();
        assert!(matches!(
            store.add_translation(&tag("de"), "Save", "Speichern"),
            Err(FinderError::UnknownCulture(c)) if c == "de"
        ));
        assert!(store.key_exists(&tag("de"), "Save").is_err());
    }

    #[test]
    fn update_touches_one_culture() {
        let mut store = two_cultures();
        store.update_translation(&tag("pl"), "Save", "Save", "Zachowaj").unwrap();
        assert_eq!(store.catalog(&tag("pl")).unwrap().get("Save").unwrap().text, "Zachowaj");
        assert_eq!(store.catalog(&CultureTag::neutral()).unwrap().get("Save").unwrap().text, "Save");
        assert_eq!(store.cultures().count(), 2);
    }

    #[test]
    fn rename_does_not_follow_into_other_cultures() {
        let mut store = two_cultures();
        store.update_translation(&tag("pl"), "Save", "SaveAll", "Zapisz wszystko").unwrap();
        let pl = store.catalog(&tag("pl")).unwrap();
        let neutral = store.catalog(&CultureTag::neutral()).unwrap();
        assert!(pl.contains_key("SaveAll") && !pl.contains_key("Save"));
        assert!(neutral.contains_key("Save") && !neutral.contains_key("SaveAll"));
    }
}
