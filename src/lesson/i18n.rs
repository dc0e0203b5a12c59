//! Localization
//!
//! Two languages are supported, English and French. UI strings live in
//! per-language JSON dictionaries embedded in the binary and are addressed by
//! dotted key paths (`content.codeExamples`). Lookups never fail: a missing key
//! resolves to the caller's fallback, or to the key itself.
//!
//! [`Localization`] ties the current language to an injected
//! [`KeyValueStore`](crate::lesson::prefs::KeyValueStore): it is read once at
//! construction and written back on every change, and subscribers are notified
//! of changes.

pub mod language;
pub mod localization;
pub mod translations;

pub use language::Language;
pub use localization::{Localization, SubscriptionId};
pub use translations::Translations;
