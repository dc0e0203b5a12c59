//! Preference storage
//!
//! Preferences are small string values keyed by name: the active language and
//! the last active tab of each page. Components never reach for a global
//! store; they are handed a [`KeyValueStore`] at construction.
//!
//! Two stores are provided:
//!
//! - [`MemoryStore`]: process-local, used by tests and one-shot runs
//! - [`FileStore`]: a JSON object on disk, rewritten on every `set`

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::lesson::i18n::Language;

/// Store key of the active language
pub const LANGUAGE_KEY: &str = "language";

/// Prefix of per-page active tab keys
pub const ACTIVE_TAB_PREFIX: &str = "activeTab.";

/// Error raised by a persistent store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Io(String),
    Json(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Store I/O error: {msg}"),
            StoreError::Json(msg) => write!(f, "Store format error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// String key-value storage capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat JSON object
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(source) => match serde_json::from_str::<Value>(&source) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(StoreError::Json(format!(
                        "{} does not hold a JSON object",
                        path.display()
                    )))
                }
                Err(e) => return Err(StoreError::Json(format!("{}: {e}", path.display()))),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(StoreError::Io(format!("{}: {e}", path.display()))),
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "opened preference store");
        Ok(FileStore { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Io(format!("{}: {e}", parent.display())))?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::Json(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        tracing::debug!(key, value, "storing preference");
        self.flush()
    }
}

/// Typed view over a store
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Preferences { store }
    }

    /// Stored language, `en` when absent or unknown
    pub fn language(&self) -> Language {
        self.store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.store.set(LANGUAGE_KEY, language.code())
    }

    /// Last active tab of `page`, if one was stored
    pub fn active_tab(&self, page: &str) -> Option<String> {
        self.store.get(&active_tab_key(page))
    }

    /// Last active tab of `page`, or the first of `tabs`
    pub fn active_tab_or_first(&self, page: &str, tabs: &[&str]) -> Option<String> {
        self.active_tab(page)
            .filter(|tab| tabs.contains(&tab.as_str()))
            .or_else(|| tabs.first().map(|tab| tab.to_string()))
    }

    pub fn set_active_tab(&mut self, page: &str, tab: &str) -> Result<(), StoreError> {
        self.store.set(&active_tab_key(page), tab)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn active_tab_key(page: &str) -> String {
    format!("{ACTIVE_TAB_PREFIX}{page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k"), Some("w".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "fr").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY), Some("fr".to_string()));
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Json(_))));

        fs::write(&path, "{broken").unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.active_tab("spring"), None);
        assert_eq!(
            prefs.active_tab_or_first("spring", &["ioc", "aop"]),
            Some("ioc".to_string())
        );
        assert_eq!(prefs.active_tab_or_first("spring", &[]), None);
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_language(Language::Fr).unwrap();
        prefs.set_active_tab("spring", "aop").unwrap();
        assert_eq!(prefs.language(), Language::Fr);
        assert_eq!(
            prefs.active_tab_or_first("spring", &["ioc", "aop"]),
            Some("aop".to_string())
        );
        assert_eq!(
            prefs.store().get("activeTab.spring"),
            Some("aop".to_string())
        );
    }

    #[test]
    fn test_stale_active_tab_falls_back_to_first() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_active_tab("spring", "removed").unwrap();
        assert_eq!(
            prefs.active_tab_or_first("spring", &["ioc"]),
            Some("ioc".to_string())
        );
    }

    #[test]
    fn test_unknown_language_code_defaults() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "de").unwrap();
        assert_eq!(Preferences::new(store).language(), Language::En);
    }
}
