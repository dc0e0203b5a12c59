//! Card and bullet styling
//!
//! Maps a [`ContentType`] to the colors and icon used for titled cards and
//! bullets. The mapping is total; `Default` is the neutral grey scheme.

use crate::lesson::classify::ContentType;
use crossterm::style::Color;
use serde::Serialize;

/// Two-stop background gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub fn to_css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

/// Visual scheme for one content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub border: &'static str,
    pub background: Gradient,
    pub bullet: &'static str,
    pub icon: &'static str,
}

/// Palette for a content type
pub fn palette(hint: ContentType) -> Palette {
    let (border, from, to, bullet, icon) = match hint {
        ContentType::Definition => ("#3b82f6", "#eff6ff", "#dbeafe", "#2563eb", "📘"),
        ContentType::Example => ("#8b5cf6", "#f5f3ff", "#ede9fe", "#7c3aed", "💡"),
        ContentType::Benefits => ("#22c55e", "#f0fdf4", "#dcfce7", "#16a34a", "✅"),
        ContentType::Drawbacks => ("#ef4444", "#fef2f2", "#fee2e2", "#dc2626", "⚠️"),
        ContentType::Types => ("#f59e0b", "#fffbeb", "#fef3c7", "#d97706", "🗂️"),
        ContentType::Features => ("#14b8a6", "#f0fdfa", "#ccfbf1", "#0d9488", "⭐"),
        ContentType::Default => ("#6b7280", "#f9fafb", "#f3f4f6", "#4b5563", "📄"),
    };
    Palette {
        border,
        background: Gradient { from, to },
        bullet,
        icon,
    }
}

/// CSS class carried by cards and lists of this type
pub fn css_class(hint: ContentType) -> String {
    format!("lesson-hint-{}", hint.as_str())
}

/// Closest terminal color for bullets and card borders
pub fn terminal_color(hint: ContentType) -> Color {
    match hint {
        ContentType::Definition => Color::Blue,
        ContentType::Example => Color::Magenta,
        ContentType::Benefits => Color::Green,
        ContentType::Drawbacks => Color::Red,
        ContentType::Types => Color::Yellow,
        ContentType::Features => Color::Cyan,
        ContentType::Default => Color::Grey,
    }
}

/// Stylesheet rules for every content type
pub fn stylesheet() -> String {
    let mut css = String::new();
    for hint in ContentType::ALL {
        let p = palette(hint);
        let class = css_class(hint);
        css.push_str(&format!(
            ".lesson-card.{class} {{ border-left: 4px solid {}; background: {}; }}\n",
            p.border,
            p.background.to_css()
        ));
        css.push_str(&format!(
            ".lesson-list.{class} li::marker {{ color: {}; }}\n",
            p.bullet
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct_per_hint() {
        let borders: std::collections::HashSet<_> =
            ContentType::ALL.iter().map(|h| palette(*h).border).collect();
        assert_eq!(borders.len(), ContentType::ALL.len());
    }

    #[test]
    fn test_benefits_are_green() {
        let p = palette(ContentType::Benefits);
        assert_eq!(p.bullet, "#16a34a");
        assert_eq!(terminal_color(ContentType::Benefits), Color::Green);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(css_class(ContentType::Drawbacks), "lesson-hint-drawbacks");
    }

    #[test]
    fn test_stylesheet_covers_all_hints() {
        let css = stylesheet();
        for hint in ContentType::ALL {
            assert!(css.contains(&css_class(hint)));
        }
        assert!(css.contains("linear-gradient(135deg, #f0fdf4, #dcfce7)"));
    }
}
