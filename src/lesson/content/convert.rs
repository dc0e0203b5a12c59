//! JSON → ContentNode conversion
//!
//! Conversion is total: every `serde_json::Value` maps to some node. Shapes the
//! renderer has no use for (numbers, booleans) become `ContentNode::Empty`.
//!
//! Object classification, first match wins:
//!
//!     1. string `title` + string `simple-content`  → TaggedSimple
//!     2. string `title` + non-null `multi-content` → TaggedMulti
//!     3. anything else                             → Object (without `title`)

use super::node::ContentNode;
use super::{MULTI_CONTENT_KEY, SIMPLE_CONTENT_KEY, TITLE_KEY};
use serde_json::{Map, Value};

/// Convert a JSON value into a content node
pub fn from_value(value: &Value) -> ContentNode {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => ContentNode::Empty,
        Value::String(text) => ContentNode::text(text.clone()),
        Value::Array(items) => ContentNode::list(items.iter().map(from_value).collect()),
        Value::Object(map) => from_object(map),
    }
}

/// Parse a JSON string and convert it into a content node
pub fn from_json_str(source: &str) -> Result<ContentNode, serde_json::Error> {
    let value: Value = serde_json::from_str(source)?;
    Ok(from_value(&value))
}

fn from_object(map: &Map<String, Value>) -> ContentNode {
    if let Some(title) = map.get(TITLE_KEY).and_then(Value::as_str) {
        if let Some(content) = map.get(SIMPLE_CONTENT_KEY).and_then(Value::as_str) {
            return ContentNode::tagged_simple(title, content);
        }
        match map.get(MULTI_CONTENT_KEY) {
            Some(Value::Null) | None => {}
            Some(payload) => return ContentNode::tagged_multi(title, from_value(payload)),
        }
    }

    let entries = map
        .iter()
        .filter(|(key, _)| key.as_str() != TITLE_KEY)
        .map(|(key, value)| (key.clone(), from_value(value)))
        .collect();
    ContentNode::object(entries)
}

impl From<&Value> for ContentNode {
    fn from(value: &Value) -> Self {
        from_value(value)
    }
}
