//! Content renderer
//!
//! Walks a [`ContentNode`] and builds the [`Block`] tree. See the module docs
//! of [`render`](crate::lesson::render) for the dispatch rules.

use super::block::Block;
use crate::lesson::classify::{derive, ContentType};
use crate::lesson::content::{ContentNode, CODE_EXAMPLES_TITLE};

/// Display strings the renderer needs to produce on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Title of the card wrapping a `code_examples` bundle
    pub code_examples_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            code_examples_title: "Code Examples".to_string(),
        }
    }
}

/// Renders content nodes into view trees
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Renderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `node` under the inherited hint `hint`
    pub fn render(&self, node: &ContentNode, hint: ContentType) -> Block {
        match node {
            ContentNode::Empty => Block::Empty,
            ContentNode::Text { text } => render_text(text),
            ContentNode::List { items } => self.render_list(items, hint),
            ContentNode::TaggedMulti { title, content } if title == CODE_EXAMPLES_TITLE => {
                match content.as_ref() {
                    ContentNode::List { items } => self.render_code_examples(items),
                    other => self.render_tagged_multi(title, other, hint),
                }
            }
            ContentNode::TaggedSimple { title, content } => {
                render_tagged_simple(title, content, hint)
            }
            ContentNode::TaggedMulti { title, content } => {
                self.render_tagged_multi(title, content, hint)
            }
            ContentNode::Object { entries } => self.render_object(entries, hint),
        }
    }

    fn render_list(&self, items: &[ContentNode], hint: ContentType) -> Block {
        let texts: Option<Vec<String>> = items
            .iter()
            .map(|item| item.as_text().map(str::to_string))
            .collect();
        match texts {
            Some(texts) => Block::bullet_list(hint, texts),
            None => Block::stack(items.iter().map(|item| self.render(item, hint)).collect()),
        }
    }

    fn render_code_examples(&self, entries: &[ContentNode]) -> Block {
        let children = entries
            .iter()
            .map(|entry| match entry {
                ContentNode::TaggedSimple { title, content } => {
                    Block::code(Some(title.clone()), content)
                }
                ContentNode::Text { text } => Block::code(None, text),
                other => self.render(other, ContentType::Example),
            })
            .collect();
        Block::card(
            self.options.code_examples_title.clone(),
            ContentType::Example,
            children,
        )
    }

    fn render_tagged_multi(&self, title: &str, content: &ContentNode, hint: ContentType) -> Block {
        let hint = derive(title, hint);
        let body = self.render(content, hint);
        Block::card(title, hint, body.into_children())
    }

    fn render_object(&self, entries: &[(String, ContentNode)], hint: ContentType) -> Block {
        if entries.is_empty() {
            tracing::debug!("object without renderable keys, rendering nothing");
            return Block::Empty;
        }

        let mut children: Vec<Block> = entries
            .iter()
            .map(|(key, value)| {
                let hint = derive(key, hint);
                let body = self.render(value, hint);
                let carded = match value {
                    ContentNode::List { .. } => true,
                    ContentNode::Object { .. } => !value.has_payload_key(),
                    _ => false,
                };
                if !carded {
                    body
                } else if body.is_empty() {
                    tracing::debug!(key = key.as_str(), "nothing under key, skipping card");
                    Block::Empty
                } else {
                    Block::card(key.as_str(), hint, body.into_children())
                }
            })
            .collect();

        match children.len() {
            1 => children.remove(0),
            _ => Block::stack(children),
        }
    }
}

fn render_text(text: &str) -> Block {
    if !text.contains('\n') {
        return Block::paragraph(text);
    }
    Block::stack(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Block::paragraph)
            .collect(),
    )
}

fn render_tagged_simple(title: &str, content: &str, hint: ContentType) -> Block {
    let lowered = title.to_lowercase();
    if lowered.contains("code") || lowered.contains("example") {
        return Block::code(Some(title.to_string()), content);
    }
    let hint = derive(title, hint);
    Block::card(title, hint, vec![Block::paragraph(content)])
}

/// Render with default options
pub fn render(node: &ContentNode, hint: ContentType) -> Block {
    Renderer::new().render(node, hint)
}
