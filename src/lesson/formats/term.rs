//! Terminal output
//!
//! Cards print as an icon and bold title with their children indented below.
//! Bullets take the hint color, code lines are highlighted and framed with a
//! gutter. Colors are emitted through crossterm and can be switched off.

use super::registry::{FormatError, Formatter};
use crate::lesson::highlight::Span;
use crate::lesson::render::{Block, CodeBlock};
use crate::lesson::style;
use crossterm::style::{self as ansi, Color, Stylize};

const BULLET: &str = "•";
const GUTTER: &str = "│ ";

/// Terminal formatter
#[derive(Debug, Clone)]
pub struct TermFormatter {
    pub color: bool,
}

impl Default for TermFormatter {
    fn default() -> Self {
        TermFormatter { color: true }
    }
}

impl Formatter for TermFormatter {
    fn name(&self) -> &str {
        "term"
    }

    fn description(&self) -> &str {
        "Colored terminal output"
    }

    fn serialize(&self, block: &Block) -> Result<String, FormatError> {
        Ok(to_terminal_string(block, self.color))
    }
}

/// Render a view tree for the terminal
pub fn to_terminal_string(block: &Block, color: bool) -> String {
    let mut writer = TermWriter {
        output: String::new(),
        depth: 0,
        color,
    };
    writer.write_block(block);
    writer.output
}

struct TermWriter {
    output: String,
    depth: usize,
    color: bool,
}

impl TermWriter {
    fn paint(&self, text: &str, color: Option<Color>, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let mut styled = ansi::style(text);
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if bold {
            styled = styled.bold();
        }
        styled.to_string()
    }

    fn line(&mut self, content: &str) {
        self.output.push_str(&"  ".repeat(self.depth));
        self.output.push_str(content);
        self.output.push('\n');
    }

    fn write_block(&mut self, block: &Block) {
        match block {
            Block::Empty => {}
            Block::Paragraph { text } => self.line(text),
            Block::BulletList { hint, items } => {
                let bullet = self.paint(BULLET, Some(style::terminal_color(*hint)), false);
                for item in items {
                    self.line(&format!("{bullet} {item}"));
                }
            }
            Block::Stack { children } => {
                for child in children {
                    self.write_block(child);
                }
            }
            Block::Card {
                title,
                hint,
                children,
            } => {
                let heading = format!("{} {}", style::palette(*hint).icon, title);
                let heading = self.paint(&heading, Some(style::terminal_color(*hint)), true);
                self.line(&heading);
                self.depth += 1;
                for child in children {
                    self.write_block(child);
                }
                self.depth -= 1;
            }
            Block::Code(code) => self.write_code(code),
        }
    }

    fn write_code(&mut self, code: &CodeBlock) {
        if let Some(label) = &code.label {
            let label = self.paint(label, None, true);
            self.line(&label);
        }
        let gutter = self.paint(GUTTER, Some(Color::DarkGrey), false);
        for line in split_lines(&code.spans()) {
            let mut rendered = gutter.clone();
            for span in line {
                rendered.push_str(&self.paint(&span.text, span.kind.terminal_color(), false));
            }
            self.line(&rendered);
        }
    }
}

/// Break spans at newlines so each output line can be indented on its own
fn split_lines(spans: &[Span]) -> Vec<Vec<Span>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        for (i, piece) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !piece.is_empty() {
                if let Some(current) = lines.last_mut() {
                    current.push(Span {
                        kind: span.kind,
                        text: piece.to_string(),
                    });
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::classify::ContentType;

    #[test]
    fn test_plain_card() {
        let block = Block::card(
            "Pros",
            ContentType::Benefits,
            vec![Block::bullet_list(
                ContentType::Benefits,
                vec!["Fast".into(), "Simple".into()],
            )],
        );
        assert_eq!(
            to_terminal_string(&block, false),
            "✅ Pros\n  • Fast\n  • Simple\n"
        );
    }

    #[test]
    fn test_code_lines_get_gutter() {
        let block = Block::code(Some("Loop".into()), "for (;;) {\n    x++;\n}");
        assert_eq!(
            to_terminal_string(&block, false),
            "Loop\n│ for (;;) {\n│     x++;\n│ }\n"
        );
    }

    #[test]
    fn test_empty_prints_nothing() {
        assert_eq!(to_terminal_string(&Block::Empty, false), "");
    }
}
