//! Translation dictionaries
//!
//! A dictionary is a nested JSON object; a dotted key walks it one segment per
//! level. Only string leaves count as translations.

use super::language::Language;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

const EN_JSON: &str = include_str!("locales/en.json");
const FR_JSON: &str = include_str!("locales/fr.json");

static BUILTIN: Lazy<Translations> = Lazy::new(|| {
    let mut translations = Translations::new();
    translations.insert_json(Language::En, EN_JSON);
    translations.insert_json(Language::Fr, FR_JSON);
    translations
});

/// Dictionaries for every language
#[derive(Debug, Clone, Default)]
pub struct Translations {
    dictionaries: HashMap<Language, Value>,
}

impl Translations {
    /// Empty set of dictionaries; every lookup falls back
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionaries shipped with the crate
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn insert(&mut self, language: Language, dictionary: Value) {
        self.dictionaries.insert(language, dictionary);
    }

    /// Insert a dictionary from JSON source. Invalid JSON leaves the language
    /// without a dictionary.
    pub fn insert_json(&mut self, language: Language, source: &str) {
        match serde_json::from_str(source) {
            Ok(dictionary) => self.insert(language, dictionary),
            Err(e) => tracing::error!(%language, "invalid translation dictionary: {e}"),
        }
    }

    /// Translation of `key` in `language`, if one exists
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.dictionaries.get(&language)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// Resolve `key`: the translation, else `fallback`, else the key itself
    pub fn lookup(&self, language: Language, key: &str, fallback: Option<&str>) -> String {
        match self.get(language, key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(%language, key, "missing translation");
                fallback.unwrap_or(key).to_string()
            }
        }
    }

    pub fn has(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }
}
