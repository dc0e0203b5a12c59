//! Topic documents
//!
//! A topic document is one JSON file of study material. Two layouts are
//! accepted:
//!
//! ```text
//! { "title": "Spring", "tags": ["java"], "topics": [ { "id": "ioc", "title": "IoC", "content": ... } ] }
//! ```
//!
//! or any other JSON value, read as a single untitled topic whose content is
//! the whole document.
//!
//! Localized variants sit next to the base file as `<stem>.<lang>.json`
//! (`spring.fr.json` next to `spring.json`). Loading for a language prefers the
//! variant and falls back to the base file.

use crate::lesson::content::{self, ContentNode};
use crate::lesson::i18n::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Error raised while loading a topic document
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Io { path: PathBuf, message: String },
    Json { path: PathBuf, message: String },
    TopicNotFound(String),
    Empty(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, message } => {
                write!(f, "Cannot read '{}': {message}", path.display())
            }
            LoadError::Json { path, message } => {
                write!(f, "Invalid JSON in '{}': {message}", path.display())
            }
            LoadError::TopicNotFound(id) => write!(f, "Topic '{id}' not found"),
            LoadError::Empty(path) => write!(f, "'{}' has no topics", path.display()),
        }
    }
}

impl std::error::Error for LoadError {}

/// One topic of a document
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: String,
    pub title: Option<String>,
    pub content: ContentNode,
}

/// A loaded topic document
#[derive(Debug, Clone, PartialEq)]
pub struct TopicDocument {
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub topics: Vec<Topic>,
    /// Page name used to key per-page preferences
    pub page: String,
}

#[derive(Deserialize)]
struct RawDocument {
    title: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    topics: Vec<RawTopic>,
}

#[derive(Deserialize)]
struct RawTopic {
    id: Option<String>,
    title: Option<String>,
    #[serde(default)]
    content: Value,
}

impl TopicDocument {
    /// Build a document from parsed JSON
    pub fn from_value(page: impl Into<String>, value: Value) -> Self {
        let page = page.into();
        let has_topics = value.get("topics").is_some_and(Value::is_array);
        if has_topics {
            if let Ok(raw) = serde_json::from_value::<RawDocument>(value.clone()) {
                return Self::from_raw(page, raw);
            }
        }
        TopicDocument {
            title: None,
            tags: Vec::new(),
            topics: vec![Topic {
                id: page.clone(),
                title: None,
                content: content::from_value(&value),
            }],
            page,
        }
    }

    fn from_raw(page: String, raw: RawDocument) -> Self {
        let topics = raw
            .topics
            .into_iter()
            .enumerate()
            .map(|(index, topic)| {
                let id = topic
                    .id
                    .or_else(|| topic.title.as_deref().map(slugify))
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| format!("topic-{}", index + 1));
                Topic {
                    id,
                    title: topic.title,
                    content: content::from_value(&topic.content),
                }
            })
            .collect();
        TopicDocument {
            title: raw.title,
            tags: raw.tags,
            topics,
            page,
        }
    }

    /// Parse a document from JSON source
    pub fn from_json_str(page: impl Into<String>, source: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Self::from_value(page, value))
    }

    pub fn topic(&self, id: &str) -> Result<&Topic, LoadError> {
        self.topics
            .iter()
            .find(|topic| topic.id == id)
            .ok_or_else(|| LoadError::TopicNotFound(id.to_string()))
    }

    pub fn topic_ids(&self) -> Vec<&str> {
        self.topics.iter().map(|topic| topic.id.as_str()).collect()
    }

    pub fn first_topic(&self) -> Option<&Topic> {
        self.topics.first()
    }
}

/// Lower-case, dash-separated identifier for a title
pub fn slugify(title: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Path of the `language` variant of `base` (`a/b.json` → `a/b.fr.json`)
pub fn localized_path(base: &Path, language: Language) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match base.extension() {
        Some(ext) => format!("{stem}.{}.{}", language.code(), ext.to_string_lossy()),
        None => format!("{stem}.{}", language.code()),
    };
    base.with_file_name(file_name)
}

/// Page name of a document path: the file stem without a language suffix
pub fn page_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.rsplit_once('.') {
        Some((base, suffix)) if Language::from_code(suffix).is_some() => base.to_string(),
        _ => stem,
    }
}

/// Load a document from a file
pub fn load(path: impl AsRef<Path>) -> Result<TopicDocument, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let document =
        TopicDocument::from_json_str(page_name(path), &source).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if document.topics.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    tracing::debug!(
        path = %path.display(),
        topics = document.topics.len(),
        "loaded topic document"
    );
    Ok(document)
}

/// Load the `language` variant of a document, falling back to the base file
pub fn load_localized(path: impl AsRef<Path>, language: Language) -> Result<TopicDocument, LoadError> {
    let base = path.as_ref();
    let localized = localized_path(base, language);
    if localized.is_file() {
        return load(&localized);
    }
    tracing::debug!(
        path = %base.display(),
        %language,
        "no localized variant, using base document"
    );
    load(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topics_layout() {
        let doc = TopicDocument::from_value(
            "spring",
            json!({
                "title": "Spring",
                "tags": ["java", "framework"],
                "topics": [
                    {"id": "ioc", "title": "Inversion of Control", "content": "text"},
                    {"title": "Bean Scopes!", "content": ["a", "b"]},
                    {"content": null}
                ]
            }),
        );
        assert_eq!(doc.title.as_deref(), Some("Spring"));
        assert_eq!(doc.tags, vec!["java", "framework"]);
        assert_eq!(doc.topic_ids(), vec!["ioc", "bean-scopes", "topic-3"]);
        assert_eq!(doc.topic("ioc").unwrap().content, ContentNode::text("text"));
        assert_eq!(doc.topics[2].content, ContentNode::Empty);
    }

    #[test]
    fn test_single_topic_layout() {
        let doc = TopicDocument::from_value("notes", json!({"title": "T", "simple-content": "x"}));
        assert_eq!(doc.topics.len(), 1);
        assert_eq!(doc.topics[0].id, "notes");
        assert_eq!(doc.topics[0].content, ContentNode::tagged_simple("T", "x"));
    }

    #[test]
    fn test_topic_not_found() {
        let doc = TopicDocument::from_value("p", json!("x"));
        assert_eq!(
            doc.topic("missing"),
            Err(LoadError::TopicNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Bean Scopes!"), "bean-scopes");
        assert_eq!(slugify("  Spring & Java 17 "), "spring-java-17");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_localized_path_and_page_name() {
        let base = Path::new("content/spring.json");
        assert_eq!(
            localized_path(base, Language::Fr),
            PathBuf::from("content/spring.fr.json")
        );
        assert_eq!(page_name(base), "spring");
        assert_eq!(page_name(Path::new("content/spring.fr.json")), "spring");
        assert_eq!(page_name(Path::new("content/v1.2.json")), "v1.2");
    }

    #[test]
    fn test_load_localized_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("db.json");
        fs::write(&base, r#"{"topics": [{"id": "sql", "content": "English"}]}"#).unwrap();

        let doc = load_localized(&base, Language::Fr).unwrap();
        assert_eq!(doc.topic("sql").unwrap().content, ContentNode::text("English"));

        fs::write(
            dir.path().join("db.fr.json"),
            r#"{"topics": [{"id": "sql", "content": "Français"}]}"#,
        )
        .unwrap();
        let doc = load_localized(&base, Language::Fr).unwrap();
        assert_eq!(doc.topic("sql").unwrap().content, ContentNode::text("Français"));
        assert_eq!(doc.page, "db");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load(&missing), Err(LoadError::Io { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();
        assert!(matches!(load(&broken), Err(LoadError::Json { .. })));

        let empty = dir.path().join("empty.json");
        fs::write(&empty, r#"{"topics": []}"#).unwrap();
        assert!(matches!(load(&empty), Err(LoadError::Empty(_))));
    }
}
