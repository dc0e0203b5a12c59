//! Highlighted spans
//!
//! Classification of identifiers, in order:
//!
//! - reserved words → `Keyword`
//! - primitive and well-known library types → `Type`
//! - other capitalized identifiers → `Class`
//! - identifiers directly followed by `(` (whitespace allowed) → `Method`
//! - anything else → `Plain`

use super::lexer::{tokenize, CodeToken};
use crossterm::style::Color;
use serde::Serialize;

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "break", "case", "catch", "class", "const", "continue", "default",
    "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if", "implements",
    "import", "instanceof", "interface", "native", "new", "package", "private", "protected",
    "public", "record", "return", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "try", "var", "volatile", "while", "yield", "true",
    "false", "null",
];

const TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void", "String",
    "Integer", "Long", "Double", "Boolean", "Object", "List", "Map", "Set", "Optional",
];

/// Highlight category of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Keyword,
    Type,
    Class,
    Method,
    String,
    Comment,
    Number,
    Annotation,
    Plain,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Keyword => "keyword",
            SpanKind::Type => "type",
            SpanKind::Class => "class",
            SpanKind::Method => "method",
            SpanKind::String => "string",
            SpanKind::Comment => "comment",
            SpanKind::Number => "number",
            SpanKind::Annotation => "annotation",
            SpanKind::Plain => "plain",
        }
    }

    /// CSS class of the markup wrapping this span, `None` for plain text
    pub fn css_class(&self) -> Option<String> {
        match self {
            SpanKind::Plain => None,
            kind => Some(format!("tok-{}", kind.as_str())),
        }
    }

    /// Terminal color, `None` for uncolored text
    pub fn terminal_color(&self) -> Option<Color> {
        match self {
            SpanKind::Keyword => Some(Color::Magenta),
            SpanKind::Type => Some(Color::Cyan),
            SpanKind::Class => Some(Color::Yellow),
            SpanKind::Method => Some(Color::Blue),
            SpanKind::String => Some(Color::Green),
            SpanKind::Comment => Some(Color::DarkGrey),
            SpanKind::Number => Some(Color::DarkYellow),
            SpanKind::Annotation => Some(Color::DarkCyan),
            SpanKind::Plain => None,
        }
    }
}

/// A run of source text with one highlight category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

/// Split source into highlighted spans. Concatenated span texts equal `source`.
pub fn highlight(source: &str) -> Vec<Span> {
    let tokens = tokenize(source);
    let mut spans: Vec<Span> = Vec::with_capacity(tokens.len());

    for (index, (token, text)) in tokens.iter().enumerate() {
        let kind = match token {
            Some(CodeToken::LineComment | CodeToken::BlockComment) => SpanKind::Comment,
            Some(CodeToken::StringLiteral | CodeToken::CharLiteral) => SpanKind::String,
            Some(CodeToken::Annotation) => SpanKind::Annotation,
            Some(CodeToken::Number) => SpanKind::Number,
            Some(CodeToken::Identifier) => classify_identifier(text, followed_by_call(&tokens, index)),
            Some(CodeToken::Whitespace | CodeToken::OpenParen | CodeToken::Other) | None => {
                SpanKind::Plain
            }
        };
        push_span(&mut spans, kind, text);
    }
    spans
}

fn followed_by_call(tokens: &[(Option<CodeToken>, &str)], index: usize) -> bool {
    tokens[index + 1..]
        .iter()
        .find(|(token, _)| !matches!(token, Some(t) if t.is_whitespace()))
        .is_some_and(|(token, _)| *token == Some(CodeToken::OpenParen))
}

fn classify_identifier(text: &str, is_call: bool) -> SpanKind {
    if KEYWORDS.contains(&text) {
        SpanKind::Keyword
    } else if TYPES.contains(&text) {
        SpanKind::Type
    } else if text.starts_with(|c: char| c.is_ascii_uppercase()) {
        SpanKind::Class
    } else if is_call {
        SpanKind::Method
    } else {
        SpanKind::Plain
    }
}

fn push_span(spans: &mut Vec<Span>, kind: SpanKind, text: &str) {
    if kind == SpanKind::Plain {
        if let Some(last) = spans.last_mut() {
            if last.kind == SpanKind::Plain {
                last.text.push_str(text);
                return;
            }
        }
    }
    spans.push(Span {
        kind,
        text: text.to_string(),
    });
}
