// File: src/persistence.rs
use crate::core::catalog::TranslationCatalog;
use crate::core::store::TranslationStore;
use crate::core::types::CultureTag;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    key: String,
    text: String,
}

/// One culture's entries. This is also the JSON interchange document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogRecord {
    culture: CultureTag,
    entries: Vec<EntryRecord>,
}

/// The serializable state of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableStore {
    catalogs: Vec<CatalogRecord>,
}

impl From<&TranslationCatalog> for CatalogRecord {
    fn from(catalog: &TranslationCatalog) -> Self {
        Self {
            culture: catalog.culture().clone(),
            entries: catalog
                .entries()
                .iter()
                .map(|t| EntryRecord {
                    key: t.key.clone(),
                    text: t.text.clone(),
                })
                .collect(),
        }
    }
}

impl From<CatalogRecord> for TranslationCatalog {
    fn from(record: CatalogRecord) -> Self {
        TranslationCatalog::from_entries(
            record.culture,
            record.entries.into_iter().map(|e| (e.key, e.text)),
        )
    }
}

/// Writes the store next to `path` first and renames it into place, so a
/// crash mid-write never leaves a truncated store behind.
pub fn save_to_disk(store: &TranslationStore, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableStore {
        catalogs: store.catalogs().map(CatalogRecord::from).collect(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;

    tracing::debug!(path = %path.display(), cultures = state.catalogs.len(), "store saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<TranslationStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableStore = bincode::deserialize_from(reader)?;

    let mut store = TranslationStore::new();
    for record in state.catalogs {
        store.insert_catalog(record.into());
    }
    tracing::debug!(path = %path.display(), "store loaded");
    Ok(store)
}

/// Exports one culture as a pretty-printed JSON document.
pub fn export_json(catalog: &TranslationCatalog, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &CatalogRecord::from(catalog))?;
    writer.flush()?;
    Ok(())
}

pub fn import_json(path: &Path) -> Result<TranslationCatalog> {
    let file = File::open(path)?;
    let record: CatalogRecord = serde_json::from_reader(BufReader::new(file))?;
    Ok(record.into())
}
