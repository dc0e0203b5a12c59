//! Content rendering
//!
//!     The renderer turns a [`ContentNode`](crate::lesson::content::ContentNode) and an
//!     inherited [`ContentType`](crate::lesson::classify::ContentType) into a view tree of
//!     [`Block`]s. The view tree is format agnostic: the serializers in
//!     [`formats`](crate::lesson::formats) turn it into HTML, tags, JSON or terminal output.
//!
//! Dispatch
//!
//!     Rules are evaluated in order, the first match wins:
//!
//!     1. empty content renders nothing
//!     2. text renders one paragraph, or one per line when it spans several lines
//!     3. lists of text render as a bullet list, other lists render each item, stacked
//!     4. objects:
//!        a. `code_examples` bundles render a card with one code block per entry
//!        b. `simple-content` renders a code block (title mentions code/example) or a card
//!        c. `multi-content` renders a card and recurses with the title's hint
//!        d. anything else renders one block per key, carding nested lists and plain
//!           nested objects; objects still holding a payload key render uncarded
//!
//!     Rendering is pure. The same node and hint always produce an equal tree, and no input
//!     shape makes it fail: malformed branches degrade to [`Block::Empty`].

pub mod block;
pub mod renderer;

pub use block::{Block, CodeBlock};
pub use renderer::{render, RenderOptions, Renderer};
