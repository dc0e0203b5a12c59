//! XML-like view tree serialization
//!
//! ## Format
//!
//! - Block type → tag name (kebab-case)
//! - Titles, hints and labels → attributes
//! - Text → escaped tag content
//! - Empty blocks produce no output
//!
//! ## Example
//!
//! ```text
//! <card title="Benefits" hint="benefits">
//!   <bullet-list hint="benefits">
//!     <item>Fast</item>
//!     <item>Simple</item>
//!   </bullet-list>
//! </card>
//! ```

use super::registry::{FormatError, Formatter};
use crate::lesson::render::Block;

/// Tag serializer over a view tree
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn line(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn serialize_block(&mut self, block: &Block) {
        match block {
            Block::Empty => {}
            Block::Paragraph { text } => {
                self.line(&format!("<paragraph>{}</paragraph>", escape_xml(text)));
            }
            Block::BulletList { hint, items } => {
                if items.is_empty() {
                    self.line(&format!("<bullet-list hint=\"{hint}\"></bullet-list>"));
                    return;
                }
                self.line(&format!("<bullet-list hint=\"{hint}\">"));
                self.indent_level += 1;
                for item in items {
                    self.line(&format!("<item>{}</item>", escape_xml(item)));
                }
                self.indent_level -= 1;
                self.line("</bullet-list>");
            }
            Block::Stack { children } => {
                self.container("<stack>", "</stack>", children);
            }
            Block::Card {
                title,
                hint,
                children,
            } => {
                let open = format!("<card title=\"{}\" hint=\"{hint}\">", escape_xml(title));
                self.container(&open, "</card>", children);
            }
            Block::Code(code) => {
                let open = match &code.label {
                    Some(label) => format!("<code label=\"{}\">", escape_xml(label)),
                    None => "<code>".to_string(),
                };
                self.line(&format!("{open}{}</code>", escape_xml(&code.source)));
            }
        }
    }

    fn container(&mut self, open: &str, close: &str, children: &[Block]) {
        if children.iter().all(Block::is_empty) {
            self.line(&format!("{open}{close}"));
            return;
        }
        self.line(open);
        self.indent_level += 1;
        for child in children {
            self.serialize_block(child);
        }
        self.indent_level -= 1;
        self.line(close);
    }
}

/// Serialize a view tree to tag format
pub fn serialize_block(block: &Block) -> String {
    if block.is_empty() {
        return String::new();
    }
    let mut serializer = TagSerializer::new();
    serializer.serialize_block(block);
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Formatter implementation for the tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag dump of the rendered view tree"
    }

    fn serialize(&self, block: &Block) -> Result<String, FormatError> {
        Ok(serialize_block(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::classify::ContentType;

    #[test]
    fn test_paragraph() {
        assert_eq!(
            serialize_block(&Block::paragraph("Hello")),
            "<paragraph>Hello</paragraph>\n"
        );
    }

    #[test]
    fn test_empty_produces_nothing() {
        assert_eq!(serialize_block(&Block::Empty), "");
        assert_eq!(serialize_block(&Block::stack(vec![Block::Empty])), "");
    }

    #[test]
    fn test_card_with_list() {
        let block = Block::card(
            "Benefits",
            ContentType::Benefits,
            vec![Block::bullet_list(
                ContentType::Benefits,
                vec!["Fast".into(), "Simple".into()],
            )],
        );
        insta::assert_snapshot!(serialize_block(&block), @r###"
        <card title="Benefits" hint="benefits">
          <bullet-list hint="benefits">
            <item>Fast</item>
            <item>Simple</item>
          </bullet-list>
        </card>
        "###);
    }

    #[test]
    fn test_code_and_escaping() {
        let block = Block::stack(vec![
            Block::code(Some("A<B>".into()), "if (a < b) {}"),
            Block::code(None, "x & y"),
        ]);
        let out = serialize_block(&block);
        assert!(out.contains("<code label=\"A&lt;B&gt;\">if (a &lt; b) {}</code>"));
        assert!(out.contains("<code>x &amp; y</code>"));
    }

    #[test]
    fn test_empty_children_are_skipped() {
        let block = Block::stack(vec![Block::paragraph("a"), Block::Empty]);
        assert_eq!(
            serialize_block(&block),
            "<stack>\n  <paragraph>a</paragraph>\n</stack>\n"
        );
        let card = Block::card("T", ContentType::Default, vec![]);
        assert_eq!(
            serialize_block(&card),
            "<card title=\"T\" hint=\"default\"></card>\n"
        );
    }
}
