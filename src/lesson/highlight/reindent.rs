//! Indentation normalization for code snippets
//!
//! 1. tabs become four spaces, trailing whitespace is dropped
//! 2. leading and trailing blank lines are dropped
//! 3. the common indentation of non-blank lines is removed
//! 4. if that leaves a braced snippet completely flat, it is re-indented by
//!    brace depth (four spaces per level)

const INDENT: &str = "    ";

/// Normalize the indentation of a code snippet
pub fn reindent(source: &str) -> String {
    let expanded = source.replace('\t', INDENT);
    let lines: Vec<&str> = expanded.lines().map(str::trim_end).collect();

    let Some(start) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(start);
    let lines = &lines[start..=end];

    let common = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| leading_spaces(line))
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| if line.is_empty() { "" } else { &line[common..] })
        .collect();

    let flat = dedented.iter().all(|line| leading_spaces(line) == 0);
    if flat && dedented.len() > 1 && dedented.iter().any(|line| line.contains('{')) {
        return indent_by_braces(&dedented);
    }
    dedented.join("\n")
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn indent_by_braces(lines: &[&str]) -> String {
    let mut depth: usize = 0;
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        let (leading_closes, net) = brace_delta(line);
        let level = depth.saturating_sub(leading_closes);
        out.push(format!("{}{}", INDENT.repeat(level), line));
        depth = (depth as isize + net).max(0) as usize;
    }
    out.join("\n")
}

/// Closing braces at the start of a line, and the net brace change of the line.
/// Braces inside string and char literals are ignored.
fn brace_delta(line: &str) -> (usize, isize) {
    let leading_closes = line.chars().take_while(|c| *c == '}').count();
    let mut net = 0isize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in line.chars() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '{' => net += 1,
                '}' => net -= 1,
                _ => {}
            },
        }
    }
    (leading_closes, net)
}
