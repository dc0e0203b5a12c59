//! HTML serialization (view tree → HTML)
//!
//! Pipeline: Block tree → rcdom nodes → html5ever serializer → HTML string.
//! Escaping is left to html5ever.
//!
//! | Block | HTML |
//! |-------|------|
//! | Paragraph | `<p class="lesson-paragraph">` |
//! | BulletList | `<ul class="lesson-list lesson-hint-*">` |
//! | Stack | `<div class="lesson-stack">` |
//! | Card | `<section class="lesson-card lesson-hint-*">` with an `<h3>` title |
//! | Code | `<figure class="lesson-code">` with `<pre><code>` and a copy button |
//!
//! Standalone output wraps the fragment in a complete page whose stylesheet is
//! generated from the hint palette.

use super::registry::{FormatError, Formatter};
use crate::lesson::render::{Block, CodeBlock};
use crate::lesson::style;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

const BASE_CSS: &str = r#"
.lesson-document { font-family: system-ui, sans-serif; line-height: 1.6; max-width: 52rem; margin: 0 auto; }
.lesson-stack > * + * { margin-top: 1rem; }
.lesson-card { border-radius: 0.5rem; padding: 0.75rem 1rem; }
.lesson-card-title { margin: 0 0 0.5rem; font-size: 1.1rem; }
.lesson-code { margin: 0.5rem 0; }
.lesson-code pre { background: #1e1e2e; color: #cdd6f4; padding: 0.75rem; border-radius: 0.4rem; overflow-x: auto; }
.lesson-copy { float: right; font-size: 0.8rem; }
.tok-keyword { color: #cba6f7; } .tok-type { color: #89dceb; } .tok-class { color: #f9e2af; }
.tok-method { color: #89b4fa; } .tok-string { color: #a6e3a1; } .tok-comment { color: #6c7086; font-style: italic; }
.tok-number { color: #fab387; } .tok-annotation { color: #94e2d5; }
"#;

/// HTML output options
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    /// Wrap the fragment in a full page with embedded CSS
    pub standalone: bool,
    /// Label of the copy button on code blocks
    pub copy_label: String,
    /// Page title and `lang` attribute of standalone output
    pub title: String,
    pub lang: String,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        HtmlFormatter {
            standalone: false,
            copy_label: "Copy".to_string(),
            title: "Study Notes".to_string(),
            lang: "en".to_string(),
        }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Semantic HTML with hint-colored cards and highlighted code"
    }

    fn serialize(&self, block: &Block) -> Result<String, FormatError> {
        let fragment = serialize_to_html(block, &self.copy_label)?;
        if self.standalone {
            Ok(wrap_in_document(&fragment, &self.title, &self.lang))
        } else {
            Ok(fragment)
        }
    }
}

/// Serialize a view tree to an HTML fragment
pub fn serialize_to_html(block: &Block, copy_label: &str) -> Result<String, FormatError> {
    let container = create_element("div", vec![("class", "lesson-document")]);
    append_block(&container, block, copy_label);
    serialize_children(&container)
}

fn append_block(parent: &Handle, block: &Block, copy_label: &str) {
    match block {
        Block::Empty => {}

        Block::Paragraph { text } => {
            let p = create_element("p", vec![("class", "lesson-paragraph")]);
            p.children.borrow_mut().push(create_text(text));
            parent.children.borrow_mut().push(p);
        }

        Block::BulletList { hint, items } => {
            let class = format!("lesson-list {}", style::css_class(*hint));
            let ul = create_element("ul", vec![("class", class.as_str()), ("data-hint", hint.as_str())]);
            for item in items {
                let li = create_element("li", vec![]);
                li.children.borrow_mut().push(create_text(item));
                ul.children.borrow_mut().push(li);
            }
            parent.children.borrow_mut().push(ul);
        }

        Block::Stack { children } => {
            let div = create_element("div", vec![("class", "lesson-stack")]);
            for child in children {
                append_block(&div, child, copy_label);
            }
            parent.children.borrow_mut().push(div);
        }

        Block::Card {
            title,
            hint,
            children,
        } => {
            let class = format!("lesson-card {}", style::css_class(*hint));
            let section =
                create_element("section", vec![("class", class.as_str()), ("data-hint", hint.as_str())]);

            let heading = create_element("h3", vec![("class", "lesson-card-title")]);
            let icon = create_element("span", vec![("class", "lesson-icon")]);
            icon.children
                .borrow_mut()
                .push(create_text(style::palette(*hint).icon));
            heading.children.borrow_mut().push(icon);
            heading
                .children
                .borrow_mut()
                .push(create_text(&format!(" {title}")));
            section.children.borrow_mut().push(heading);

            for child in children {
                append_block(&section, child, copy_label);
            }
            parent.children.borrow_mut().push(section);
        }

        Block::Code(code) => append_code(parent, code, copy_label),
    }
}

fn append_code(parent: &Handle, code: &CodeBlock, copy_label: &str) {
    let figure = create_element("figure", vec![("class", "lesson-code")]);

    if let Some(label) = &code.label {
        let caption = create_element("figcaption", vec![]);
        caption.children.borrow_mut().push(create_text(label));
        figure.children.borrow_mut().push(caption);
    }

    let button = create_element(
        "button",
        vec![
            ("class", "lesson-copy"),
            ("type", "button"),
            ("data-copy", code.copy_text()),
        ],
    );
    button.children.borrow_mut().push(create_text(copy_label));
    figure.children.borrow_mut().push(button);

    let pre = create_element("pre", vec![]);
    let code_el = create_element("code", vec![]);
    for span in code.spans() {
        match span.kind.css_class() {
            None => code_el.children.borrow_mut().push(create_text(&span.text)),
            Some(class) => {
                let el = create_element("span", vec![("class", class.as_str())]);
                el.children.borrow_mut().push(create_text(&span.text));
                code_el.children.borrow_mut().push(el);
            }
        }
    }
    pre.children.borrow_mut().push(code_el);
    figure.children.borrow_mut().push(pre);

    parent.children.borrow_mut().push(figure);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize every child of `container`, including the child element itself
fn serialize_children(container: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {}", e))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

/// Wrap a fragment in a complete HTML page with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, lang: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="lesson">
  <title>{title}</title>
  <style>
{BASE_CSS}
{palette}
  </style>
</head>
<body>
<div class="lesson-document">
{body_html}
</div>
</body>
</html>"#,
        lang = escape_attr(lang),
        title = escape_attr(title),
        palette = style::stylesheet(),
    )
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
