//! View tree
//!
//! `Block` is the output of the renderer: a small tree of presentational
//! primitives. Styling is carried as a [`ContentType`] hint and resolved by
//! the serializers through [`style::palette`](crate::lesson::style::palette).

use crate::lesson::classify::ContentType;
use crate::lesson::highlight::{self, Span};
use serde::Serialize;

/// A rendered block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    /// Nothing to show
    Empty,
    Paragraph {
        text: String,
    },
    /// Bulleted list; bullet color follows `hint`
    BulletList {
        hint: ContentType,
        items: Vec<String>,
    },
    /// Blocks stacked vertically
    Stack {
        children: Vec<Block>,
    },
    /// Titled container
    Card {
        title: String,
        hint: ContentType,
        children: Vec<Block>,
    },
    Code(CodeBlock),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn bullet_list(hint: ContentType, items: Vec<String>) -> Self {
        Block::BulletList { hint, items }
    }

    pub fn stack(children: Vec<Block>) -> Self {
        Block::Stack { children }
    }

    pub fn card(title: impl Into<String>, hint: ContentType, children: Vec<Block>) -> Self {
        Block::Card {
            title: title.into(),
            hint,
            children,
        }
    }

    pub fn code(label: Option<String>, source: &str) -> Self {
        Block::Code(CodeBlock::new(label, source))
    }

    /// Whether this block produces no visible output
    pub fn is_empty(&self) -> bool {
        match self {
            Block::Empty => true,
            Block::Stack { children } => children.iter().all(Block::is_empty),
            _ => false,
        }
    }

    /// Children to place inside a container: stacks are unwrapped, empty blocks dropped
    pub fn into_children(self) -> Vec<Block> {
        match self {
            Block::Empty => Vec::new(),
            Block::Stack { children } => children,
            other => vec![other],
        }
    }

    /// Node type name, used by inspection output
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Empty => "Empty",
            Block::Paragraph { .. } => "Paragraph",
            Block::BulletList { .. } => "BulletList",
            Block::Stack { .. } => "Stack",
            Block::Card { .. } => "Card",
            Block::Code(_) => "Code",
        }
    }

    /// All code blocks in document order
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        let mut found = Vec::new();
        self.collect_code_blocks(&mut found);
        found
    }

    fn collect_code_blocks<'a>(&'a self, found: &mut Vec<&'a CodeBlock>) {
        match self {
            Block::Code(code) => found.push(code),
            Block::Stack { children } | Block::Card { children, .. } => {
                for child in children {
                    child.collect_code_blocks(found);
                }
            }
            Block::Empty | Block::Paragraph { .. } | Block::BulletList { .. } => {}
        }
    }
}

/// A block of source code with an optional label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub label: Option<String>,
    /// Source after re-indentation
    pub source: String,
}

impl CodeBlock {
    pub fn new(label: Option<String>, source: &str) -> Self {
        CodeBlock {
            label,
            source: highlight::reindent(source),
        }
    }

    /// Highlighted spans of the source
    pub fn spans(&self) -> Vec<Span> {
        highlight::highlight(&self.source)
    }

    /// Text placed on the clipboard by the copy action
    pub fn copy_text(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(Block::Empty.is_empty());
        assert!(Block::stack(vec![]).is_empty());
        assert!(Block::stack(vec![Block::Empty, Block::stack(vec![])]).is_empty());
        assert!(!Block::paragraph("").is_empty());
        assert!(!Block::card("T", ContentType::Default, vec![]).is_empty());
    }

    #[test]
    fn test_into_children() {
        assert!(Block::Empty.into_children().is_empty());
        let stack = Block::stack(vec![Block::paragraph("a"), Block::paragraph("b")]);
        assert_eq!(stack.into_children().len(), 2);
        assert_eq!(Block::paragraph("a").into_children(), vec![Block::paragraph("a")]);
    }

    #[test]
    fn test_code_block_reindents_source() {
        let code = CodeBlock::new(None, "\n    int x = 1;\n    int y = 2;\n");
        assert_eq!(code.source, "int x = 1;\nint y = 2;");
        assert_eq!(code.copy_text(), "int x = 1;\nint y = 2;");
    }

    #[test]
    fn test_code_blocks_in_order() {
        let tree = Block::stack(vec![
            Block::code(Some("first".into()), "a"),
            Block::card(
                "Nested",
                ContentType::Example,
                vec![Block::code(Some("second".into()), "b")],
            ),
        ]);
        let labels: Vec<_> = tree
            .code_blocks()
            .iter()
            .map(|c| c.label.clone().unwrap_or_default())
            .collect();
        assert_eq!(labels, vec!["first", "second"]);
    }
}
