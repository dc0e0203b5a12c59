//! Content model
//!
//! Topic content is authored as loosely shaped JSON. This module gives it a
//! type: every JSON value converts into exactly one [`ContentNode`] variant, so
//! the renderer can dispatch with an exhaustive `match` instead of probing keys
//! at render time.
//!
//! Reserved keys
//!
//!     - `title`: display label of a tagged node, also fed to the classifier
//!     - `simple-content`: single string payload
//!     - `multi-content`: nested payload, usually a list of tagged nodes
//!
//! The title value `code_examples` marks a bundle of code snippets.

pub mod convert;
pub mod node;

pub use convert::{from_json_str, from_value};
pub use node::ContentNode;

/// Key holding a node's display title
pub const TITLE_KEY: &str = "title";

/// Key holding a single string payload
pub const SIMPLE_CONTENT_KEY: &str = "simple-content";

/// Key holding a nested payload
pub const MULTI_CONTENT_KEY: &str = "multi-content";

/// Title value that switches a tagged node to the code bundle layout
pub const CODE_EXAMPLES_TITLE: &str = "code_examples";
