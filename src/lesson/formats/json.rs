//! JSON view tree serialization

use super::registry::{FormatError, Formatter};
use crate::lesson::render::Block;

/// Pretty-printed JSON of the view tree
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "View tree as pretty-printed JSON"
    }

    fn serialize(&self, block: &Block) -> Result<String, FormatError> {
        serde_json::to_string_pretty(block)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
