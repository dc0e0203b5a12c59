//! # lesson
//!
//! Renders JSON-authored study material into HTML, terminal output and
//! inspection formats.
//!
//! A topic's content is an untyped JSON tree (`title` / `simple-content` /
//! `multi-content` objects, strings and lists). It is converted into a typed
//! [`ContentNode`](lesson::content::ContentNode), interpreted by the
//! [`Renderer`](lesson::render::Renderer) into a view tree of
//! [`Block`](lesson::render::Block)s, and serialized by one of the formats in
//! [`lesson::formats`].

pub mod lesson;

pub use lesson::classify::{classify, ContentType};
pub use lesson::content::ContentNode;
pub use lesson::render::{Block, Renderer};
