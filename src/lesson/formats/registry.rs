//! Output format lookup
//!
//! Callers pick an output by name (`--format html`). Every format is a
//! [`Formatter`] over the rendered view tree; [`FormatRegistry`] maps names to
//! formatters and keeps them in name order for listings. Registering a name
//! twice replaces the earlier formatter, which is how the CLI swaps in an HTML
//! formatter configured with translated labels.

use crate::lesson::render::Block;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter registered under this name
    FormatNotFound(String),
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "unknown output format '{name}'"),
            FormatError::SerializationError(msg) => write!(f, "could not serialize: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serializes a view tree into one output format
pub trait Formatter: Send + Sync {
    /// Name used to select the format
    fn name(&self) -> &str;

    fn serialize(&self, block: &Block) -> Result<String, FormatError>;

    /// One-line summary for `lesson formats`
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// `tag`, `html` (fragment), `json` and `term` (colored)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TagFormatter);
        registry.register(super::HtmlFormatter::default());
        registry.register(super::JsonFormatter);
        registry.register(super::TermFormatter::default());
        registry
    }

    /// Add `formatter`, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        if self.formatters.contains_key(&name) {
            tracing::debug!(format = name.as_str(), "replacing formatter");
        }
        self.formatters.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `block` in the format called `format`
    pub fn serialize(&self, block: &Block, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(block)
    }

    /// Format names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `(name, description)` pairs in alphabetical order
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::classify::ContentType;
    use crate::lesson::formats::HtmlFormatter;

    /// Prints paragraph texts only
    struct PlainText;

    impl Formatter for PlainText {
        fn name(&self) -> &str {
            "plain"
        }

        fn serialize(&self, block: &Block) -> Result<String, FormatError> {
            match block {
                Block::Paragraph { text } => Ok(text.clone()),
                other => Err(FormatError::SerializationError(format!(
                    "{} has no plain text form",
                    other.node_type()
                ))),
            }
        }
    }

    #[test]
    fn test_builtin_formats_in_name_order() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "json", "tag", "term"]);
        assert!(registry
            .describe()
            .iter()
            .all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_serialize_by_name() {
        let registry = FormatRegistry::with_defaults();
        let out = registry.serialize(&Block::paragraph("Hi"), "tag").unwrap();
        assert_eq!(out, "<paragraph>Hi</paragraph>\n");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.serialize(&Block::Empty, "pdf").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("pdf".to_string()));
        assert_eq!(err.to_string(), "unknown output format 'pdf'");
    }

    #[test]
    fn test_formatter_errors_pass_through() {
        let mut registry = FormatRegistry::new();
        registry.register(PlainText);
        assert!(registry.has("plain"));
        assert_eq!(registry.get("plain").map(|f| f.description()), Some(""));
        assert_eq!(
            registry.serialize(&Block::paragraph("ok"), "plain"),
            Ok("ok".to_string())
        );
        let err = registry
            .serialize(&Block::bullet_list(ContentType::Default, vec![]), "plain")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not serialize: BulletList has no plain text form"
        );
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(HtmlFormatter {
            standalone: true,
            ..HtmlFormatter::default()
        });
        assert_eq!(registry.list_formats().len(), 4);
        let html = registry.serialize(&Block::paragraph("x"), "html").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
