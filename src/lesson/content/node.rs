//! Content node
//!
//! `ContentNode` is the typed form of one unit of authored content. The
//! variants mirror the shapes found in topic documents:
//!
//! - `Text`: a plain string
//! - `List`: an ordered sequence of nodes
//! - `TaggedSimple`: `{ "title": .., "simple-content": "<string>" }`
//! - `TaggedMulti`: `{ "title": .., "multi-content": <node> }`
//! - `Object`: any other object, keyed sub-sections in document order
//! - `Empty`: `null` and scalars outside the grammar

use super::{MULTI_CONTENT_KEY, SIMPLE_CONTENT_KEY};
use serde::Serialize;

/// A node of the authored content tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentNode {
    Empty,
    Text {
        text: String,
    },
    List {
        items: Vec<ContentNode>,
    },
    TaggedSimple {
        title: String,
        content: String,
    },
    TaggedMulti {
        title: String,
        content: Box<ContentNode>,
    },
    Object {
        entries: Vec<(String, ContentNode)>,
    },
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text { text: text.into() }
    }

    pub fn list(items: Vec<ContentNode>) -> Self {
        ContentNode::List { items }
    }

    pub fn tagged_simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        ContentNode::TaggedSimple {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn tagged_multi(title: impl Into<String>, content: ContentNode) -> Self {
        ContentNode::TaggedMulti {
            title: title.into(),
            content: Box::new(content),
        }
    }

    pub fn object(entries: Vec<(String, ContentNode)>) -> Self {
        ContentNode::Object { entries }
    }

    /// Node type name, used by inspection output
    pub fn node_type(&self) -> &'static str {
        match self {
            ContentNode::Empty => "Empty",
            ContentNode::Text { .. } => "Text",
            ContentNode::List { .. } => "List",
            ContentNode::TaggedSimple { .. } => "TaggedSimple",
            ContentNode::TaggedMulti { .. } => "TaggedMulti",
            ContentNode::Object { .. } => "Object",
        }
    }

    /// The title of a tagged node
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentNode::TaggedSimple { title, .. } | ContentNode::TaggedMulti { title, .. } => {
                Some(title)
            }
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentNode::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentNode::Text { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ContentNode::Empty)
    }

    /// Whether this node is a tagged node (carries one of the payload keys)
    pub fn is_tagged(&self) -> bool {
        matches!(
            self,
            ContentNode::TaggedSimple { .. } | ContentNode::TaggedMulti { .. }
        )
    }

    /// Whether a generic object still carries `simple-content` or
    /// `multi-content`, i.e. a tagged node with a missing or unusable title
    pub fn has_payload_key(&self) -> bool {
        match self {
            ContentNode::Object { entries } => entries
                .iter()
                .any(|(key, _)| key == SIMPLE_CONTENT_KEY || key == MULTI_CONTENT_KEY),
            _ => false,
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + match self {
            ContentNode::Empty | ContentNode::Text { .. } | ContentNode::TaggedSimple { .. } => 0,
            ContentNode::List { items } => items.iter().map(ContentNode::node_count).sum(),
            ContentNode::TaggedMulti { content, .. } => content.node_count(),
            ContentNode::Object { entries } => entries.iter().map(|(_, v)| v.node_count()).sum(),
        }
    }

    /// Depth of the subtree; leaves have depth 1
    pub fn depth(&self) -> usize {
        1 + match self {
            ContentNode::Empty | ContentNode::Text { .. } | ContentNode::TaggedSimple { .. } => 0,
            ContentNode::List { items } => items.iter().map(ContentNode::depth).max().unwrap_or(0),
            ContentNode::TaggedMulti { content, .. } => content.depth(),
            ContentNode::Object { entries } => {
                entries.iter().map(|(_, v)| v.depth()).max().unwrap_or(0)
            }
        }
    }
}

impl From<&str> for ContentNode {
    fn from(text: &str) -> Self {
        ContentNode::text(text)
    }
}

impl From<String> for ContentNode {
    fn from(text: String) -> Self {
        ContentNode::Text { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only_on_tagged_nodes() {
        assert_eq!(ContentNode::tagged_simple("A", "b").title(), Some("A"));
        assert_eq!(
            ContentNode::tagged_multi("M", ContentNode::Empty).title(),
            Some("M")
        );
        assert_eq!(ContentNode::text("x").title(), None);
        assert_eq!(ContentNode::object(vec![]).title(), None);
    }

    #[test]
    fn test_node_count_and_depth() {
        let node = ContentNode::tagged_multi(
            "Root",
            ContentNode::list(vec![
                ContentNode::text("a"),
                ContentNode::tagged_simple("B", "b"),
            ]),
        );
        assert_eq!(node.node_count(), 4);
        assert_eq!(node.depth(), 3);
        assert_eq!(ContentNode::Empty.depth(), 1);
    }

    #[test]
    fn test_payload_key_detection() {
        let malformed = ContentNode::object(vec![(
            "simple-content".to_string(),
            ContentNode::text("s"),
        )]);
        assert!(malformed.has_payload_key());

        let plain = ContentNode::object(vec![("max".to_string(), ContentNode::text("10"))]);
        assert!(!plain.has_payload_key());
        assert!(!ContentNode::tagged_simple("T", "x").has_payload_key());
    }

    #[test]
    fn test_node_type_names() {
        assert_eq!(ContentNode::Empty.node_type(), "Empty");
        assert_eq!(ContentNode::from("x").node_type(), "Text");
        assert_eq!(ContentNode::list(vec![]).node_type(), "List");
        assert_eq!(ContentNode::object(vec![]).node_type(), "Object");
    }
}
