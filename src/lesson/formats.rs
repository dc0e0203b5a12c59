//! Output formats for rendered content
//!
//! Each format serializes a [`Block`](crate::lesson::render::Block) view tree:
//! - `tag`: XML-like tree dump, stable and diff friendly
//! - `html`: semantic HTML built through an html5ever DOM
//! - `json`: the view tree as JSON
//! - `term`: colored terminal output

pub mod html;
pub mod json;
pub mod registry;
pub mod tag;
pub mod term;

pub use html::{serialize_to_html, HtmlFormatter};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{serialize_block as serialize_tag, TagFormatter};
pub use term::{to_terminal_string, TermFormatter};
