//! Language state backed by a key-value store

use super::language::Language;
use super::translations::Translations;
use crate::lesson::prefs::{KeyValueStore, StoreError, LANGUAGE_KEY};
use crate::lesson::render::RenderOptions;

/// Handle returned by [`Localization::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(Language)>;

/// Current language, its persistence, and translation in that language
pub struct Localization<S: KeyValueStore> {
    store: S,
    language: Language,
    translations: Translations,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl<S: KeyValueStore> Localization<S> {
    /// Read the stored language (default `en`) and use the built-in dictionaries
    pub fn new(store: S) -> Self {
        Self::with_translations(store, Translations::builtin())
    }

    pub fn with_translations(store: S, translations: Translations) -> Self {
        Self::build(store, translations, Language::default())
    }

    /// Like [`Localization::new`], with `default` used when the store has no language
    pub fn with_default_language(store: S, default: Language) -> Self {
        Self::build(store, Translations::builtin(), default)
    }

    fn build(store: S, translations: Translations, default: Language) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(default);
        Localization {
            store,
            language,
            translations,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Change the language, persist it and notify subscribers.
    /// Setting the current language again is a no-op.
    pub fn set_language(&mut self, language: Language) -> Result<(), StoreError> {
        if language == self.language {
            return Ok(());
        }
        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        for (_, listener) in &self.listeners {
            listener(language);
        }
        Ok(())
    }

    /// Call `listener` with the new language after every change
    pub fn subscribe(&mut self, listener: impl Fn(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription; returns whether it existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Translate `key` in the current language
    pub fn t(&self, key: &str, fallback: Option<&str>) -> String {
        self.translations.lookup(self.language, key, fallback)
    }

    /// Render options with labels in the current language
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            code_examples_title: self.t(
                "content.codeExamples",
                Some(defaults.code_examples_title.as_str()),
            ),
        }
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::prefs::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_defaults_to_english() {
        let l10n = Localization::new(MemoryStore::new());
        assert_eq!(l10n.language(), Language::En);
        assert_eq!(l10n.t("content.copy", None), "Copy");
    }

    #[test]
    fn test_reads_stored_language() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "fr").unwrap();
        let l10n = Localization::new(store);
        assert_eq!(l10n.language(), Language::Fr);
        assert_eq!(l10n.t("content.copy", None), "Copier");
    }

    #[test]
    fn test_default_language_only_applies_to_empty_store() {
        let l10n = Localization::with_default_language(MemoryStore::new(), Language::Fr);
        assert_eq!(l10n.language(), Language::Fr);

        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "en").unwrap();
        let l10n = Localization::with_default_language(store, Language::Fr);
        assert_eq!(l10n.language(), Language::En);
    }

    #[test]
    fn test_set_language_persists_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut l10n = Localization::new(MemoryStore::new());
        let sink = Rc::clone(&seen);
        l10n.subscribe(move |language| sink.borrow_mut().push(language));

        l10n.set_language(Language::Fr).unwrap();
        l10n.set_language(Language::Fr).unwrap();

        assert_eq!(*seen.borrow(), vec![Language::Fr]);
        assert_eq!(l10n.store().get(LANGUAGE_KEY), Some("fr".to_string()));
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut l10n = Localization::new(MemoryStore::new());
        let sink = Rc::clone(&count);
        let id = l10n.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(l10n.unsubscribe(id));
        assert!(!l10n.unsubscribe(id));
        l10n.set_language(Language::Fr).unwrap();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_render_options_follow_language() {
        let mut l10n = Localization::new(MemoryStore::new());
        assert_eq!(l10n.render_options().code_examples_title, "Code Examples");
        l10n.set_language(Language::Fr).unwrap();
        assert_eq!(l10n.render_options().code_examples_title, "Exemples de code");
    }

    #[test]
    fn test_borrowed_store() {
        let mut store = MemoryStore::new();
        {
            let mut l10n = Localization::new(&mut store);
            l10n.set_language(Language::Fr).unwrap();
        }
        assert_eq!(store.get(LANGUAGE_KEY), Some("fr".to_string()));
    }
}
