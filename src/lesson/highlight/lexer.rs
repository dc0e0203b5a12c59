//! Token definitions for code highlighting
//!
//! The token set targets Java-like languages (Java, Kotlin, C-family
//! snippets) which make up most of the study material. Every character of the
//! input is covered by some token, so the lexer never has to skip input.
use logos::Logos;

/// Raw lexical tokens of a code snippet
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodeToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    CharLiteral,

    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Annotation,

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?[lLfFdD]?")]
    Number,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Identifier,

    #[token("(")]
    OpenParen,

    // Any other single character: operators, punctuation, non-ASCII text
    #[regex(r"[^A-Za-z0-9_$ \t\r\n(]")]
    Other,
}

impl CodeToken {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, CodeToken::Whitespace)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, CodeToken::LineComment | CodeToken::BlockComment)
    }
}

/// Tokenize source into tokens paired with their text
pub fn tokenize(source: &str) -> Vec<(Option<CodeToken>, &str)> {
    let mut lexer = CodeToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        tokens.push((result.ok(), lexer.slice()));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Option<CodeToken>> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            kinds("int x = 1;"),
            vec![
                Some(CodeToken::Identifier),
                Some(CodeToken::Whitespace),
                Some(CodeToken::Identifier),
                Some(CodeToken::Whitespace),
                Some(CodeToken::Other),
                Some(CodeToken::Whitespace),
                Some(CodeToken::Number),
                Some(CodeToken::Other),
            ]
        );
    }

    #[test]
    fn test_comments_and_strings() {
        let tokens = tokenize("// note\n/* block */ \"text\" 'c'");
        let kinds: Vec<_> = tokens.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            kinds,
            vec![
                Some(CodeToken::LineComment),
                Some(CodeToken::Whitespace),
                Some(CodeToken::BlockComment),
                Some(CodeToken::Whitespace),
                Some(CodeToken::StringLiteral),
                Some(CodeToken::Whitespace),
                Some(CodeToken::CharLiteral),
            ]
        );
        assert_eq!(tokens[0].1, "// note");
        assert_eq!(tokens[4].1, "\"text\"");
    }

    #[test]
    fn test_annotation_and_call() {
        assert_eq!(
            kinds("@Bean run("),
            vec![
                Some(CodeToken::Annotation),
                Some(CodeToken::Whitespace),
                Some(CodeToken::Identifier),
                Some(CodeToken::OpenParen),
            ]
        );
    }

    #[test]
    fn test_tokens_cover_input() {
        let source = "Map<String, Integer> m = new HashMap<>(); // é";
        let rebuilt: String = tokenize(source).into_iter().map(|(_, s)| s).collect();
        assert_eq!(rebuilt, source);
    }
}
