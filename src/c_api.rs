// C ABI for native editor hosts. Engines are opaque handles owned by the
// caller; every entry point catches panics so nothing unwinds across the FFI.
use crate::config::FinderConfig;
use crate::core::engine::FinderEngine;
use crate::core::types::CultureTag;
use crate::fuzzy::distance;
use libc::c_char;
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;

#[derive(Serialize)]
struct SuggestionPayload<'a> {
    key: &'a str,
    text: &'a str,
    distance: f64,
}

/// Null or non-UTF-8 input reads as the empty string.
unsafe fn str_or_empty<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => CString::default().into_raw(),
    }
}

#[no_mangle]
pub extern "C" fn finder_distance(a: *const c_char, b: *const c_char) -> f64 {
    let result = catch_unwind(|| unsafe { distance(str_or_empty(a), str_or_empty(b)) });
    result.unwrap_or(f64::MAX)
}

/// Opens (or creates) the store at `store_path`. A null or empty path gives
/// an in-memory engine. Returns null on failure.
#[no_mangle]
pub extern "C" fn finder_engine_new(store_path: *const c_char) -> *mut FinderEngine {
    let path = unsafe { str_or_empty(store_path) };
    let result = catch_unwind(|| {
        let config = FinderConfig::in_memory();
        if path.is_empty() {
            Ok(FinderEngine::new(config))
        } else {
            FinderEngine::open(&PathBuf::from(path), config)
        }
    });
    match result {
        Ok(Ok(engine)) => {
            tracing::info!(path, "engine initialized");
            Box::into_raw(Box::new(engine))
        }
        Ok(Err(e)) => {
            tracing::error!(path, error = %e, "engine initialization failed");
            ptr::null_mut()
        }
        Err(_) => {
            tracing::error!("panic during engine initialization");
            ptr::null_mut()
        }
    }
}

/// Saves the store and releases the engine.
#[no_mangle]
pub extern "C" fn finder_engine_free(engine: *mut FinderEngine) {
    if engine.is_null() {
        return;
    }
    let engine = unsafe { Box::from_raw(engine) };
    let result = catch_unwind(AssertUnwindSafe(|| engine.save()));
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "failed to save store"),
        Err(_) => tracing::error!("panic while saving store on engine release"),
    }
}

/// JSON array of `{key, text, distance}`, best first. `"[]"` on any failure.
/// The caller frees the result with [`finder_free_string`].
#[no_mangle]
pub extern "C" fn finder_get_suggestions(
    engine: *const FinderEngine,
    culture: *const c_char,
    query: *const c_char,
    count: usize,
) -> *mut c_char {
    let culture = unsafe { str_or_empty(culture) };
    let query = unsafe { str_or_empty(query) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let engine = unsafe { engine.as_ref() }?;
        let culture = CultureTag::parse(culture).ok()?;
        let found = engine.get_suggestions(&culture, query, count).ok()?;
        let payload: Vec<SuggestionPayload> = found
            .iter()
            .map(|r| SuggestionPayload {
                key: &r.translation.key,
                text: &r.translation.text,
                distance: r.distance,
            })
            .collect();
        serde_json::to_string(&payload).ok()
    }));
    let json = match result {
        Ok(Some(json)) => json,
        Ok(None) => "[]".to_string(),
        Err(_) => {
            tracing::error!("panic in get_suggestions");
            "[]".to_string()
        }
    };
    into_c_string(json)
}

#[no_mangle]
pub extern "C" fn finder_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::TranslationCatalog;
    use crate::core::store::TranslationStore;

    #[test]
    fn null_arguments_read_as_empty() {
        let hello = CString::new("Hello").unwrap();
        assert_eq!(finder_distance(ptr::null(), ptr::null()), 0.0);
        assert_eq!(finder_distance(hello.as_ptr(), hello.as_ptr()), 0.0);
        assert_eq!(
            finder_distance(hello.as_ptr(), ptr::null()),
            distance("Hello", "")
        );
    }

    #[test]
    fn suggestions_as_json() {
        let mut store = TranslationStore::new();
        store.insert_catalog(TranslationCatalog::from_entries(
            CultureTag::parse("en").unwrap(),
            [("Cancel", "Cancel"), ("SaveFile", "Save file")],
        ));
        let engine = FinderEngine::from_store(store, FinderConfig::in_memory());
        let handle = Box::into_raw(Box::new(engine));

        let culture = CString::new("en").unwrap();
        let query = CString::new("save file").unwrap();
        let raw = finder_get_suggestions(handle, culture.as_ptr(), query.as_ptr(), 1);
        let json = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
        finder_free_string(raw);
        assert_eq!(json, r#"[{"key":"SaveFile","text":"Save file","distance":0.0}]"#);

        let missing = CString::new("fr").unwrap();
        let raw = finder_get_suggestions(handle, missing.as_ptr(), query.as_ptr(), 1);
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), "[]");
        finder_free_string(raw);

        finder_engine_free(handle);
    }

    #[test]
    fn null_engine_gives_empty_list() {
        let raw = finder_get_suggestions(ptr::null(), ptr::null(), ptr::null(), 3);
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), "[]");
        finder_free_string(raw);
        finder_engine_free(ptr::null_mut());
    }

    #[test]
    fn free_survives_a_failing_save() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"file").unwrap();
        let config = FinderConfig {
            store_path: Some(blocker.join("store.bin")),
            ..FinderConfig::in_memory()
        };
        let engine = FinderEngine::from_store(TranslationStore::new(), config);
        assert!(engine.save().is_err());
        finder_engine_free(Box::into_raw(Box::new(engine)));
        assert!(blocker.is_file());
    }

    #[test]
    fn engine_new_with_empty_path_is_in_memory() {
        let handle = finder_engine_new(ptr::null());
        assert!(!handle.is_null());
        assert!(unsafe { &*handle }.store_path().is_none());
        finder_engine_free(handle);
    }
}
