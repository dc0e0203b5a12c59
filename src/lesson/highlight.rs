//! Code display
//!
//! Code snippets in topic documents are stored as JSON strings, so they often
//! arrive with stray indentation or none at all. This module prepares them for
//! display:
//!
//! - [`reindent`] normalizes indentation
//! - [`highlight`] splits source into colored [`Span`]s using a logos lexer
//!
//! None of these fail; any input, including the empty string, yields output.

pub mod lexer;
pub mod reindent;
pub mod spans;

pub use reindent::reindent;
pub use spans::{highlight, Span, SpanKind};
