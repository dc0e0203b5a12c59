//! Content-type classification
//!
//! Titles are free text. To pick a visual treatment, a title is lower-cased and
//! matched by substring against [`KEYWORD_TABLE`]. Groups are scanned in table
//! order and the first group with any matching keyword wins, so overlapping
//! titles resolve deterministically:
//!
//! - "Example of a Benefit" → `Benefits` (benefits are checked before examples)
//! - "Disadvantages" → `Benefits` ("disadvantage" contains "advantage")
//! - "Code Features" → `Example`
//!
//! Hints propagate downwards: a child keeps its parent's hint unless its own
//! title classifies to something other than `Default` (see [`derive`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual category of a titled section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Definition,
    Example,
    Benefits,
    Drawbacks,
    Types,
    Features,
    #[default]
    Default,
}

impl ContentType {
    pub const ALL: [ContentType; 7] = [
        ContentType::Definition,
        ContentType::Example,
        ContentType::Benefits,
        ContentType::Drawbacks,
        ContentType::Types,
        ContentType::Features,
        ContentType::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Definition => "definition",
            ContentType::Example => "example",
            ContentType::Benefits => "benefits",
            ContentType::Drawbacks => "drawbacks",
            ContentType::Types => "types",
            ContentType::Features => "features",
            ContentType::Default => "default",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|hint| hint.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown content type '{s}'"))
    }
}

/// Keyword groups in priority order. Keywords are lower case.
pub const KEYWORD_TABLE: &[(ContentType, &[&str])] = &[
    (ContentType::Benefits, &["benefit", "advantage", "avantage"]),
    (
        ContentType::Drawbacks,
        &["drawback", "disadvantage", "inconvénient", "inconvenient"],
    ),
    (ContentType::Example, &["example", "code", "exemple"]),
    (ContentType::Types, &["type"]),
    (
        ContentType::Features,
        &["feature", "property", "caractéristique", "propriété"],
    ),
    (ContentType::Definition, &["definition", "définition"]),
];

/// Classify a title into a content type
pub fn classify(title: &str) -> ContentType {
    let title = title.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(hint, _)| *hint)
        .unwrap_or_default()
}

/// Classify an optional title; absent titles are `Default`
pub fn classify_optional(title: Option<&str>) -> ContentType {
    title.map(classify).unwrap_or_default()
}

/// Hint for a child titled `title` under a parent styled `inherited`
pub fn derive(title: &str, inherited: ContentType) -> ContentType {
    match classify(title) {
        ContentType::Default => inherited,
        specific => specific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Benefits", ContentType::Benefits)]
    #[case("Key Advantages", ContentType::Benefits)]
    #[case("Avantages", ContentType::Benefits)]
    #[case("Drawbacks", ContentType::Drawbacks)]
    #[case("Inconvénients", ContentType::Drawbacks)]
    #[case("Example", ContentType::Example)]
    #[case("Sample Code", ContentType::Example)]
    #[case("Exemple", ContentType::Example)]
    #[case("Bean Types", ContentType::Types)]
    #[case("Features", ContentType::Features)]
    #[case("Key Property", ContentType::Features)]
    #[case("Caractéristiques", ContentType::Features)]
    #[case("Propriétés", ContentType::Features)]
    #[case("Definition", ContentType::Definition)]
    #[case("DÉFINITION", ContentType::Definition)]
    #[case("Overview", ContentType::Default)]
    #[case("", ContentType::Default)]
    fn test_classify_single_group(#[case] title: &str, #[case] expected: ContentType) {
        assert_eq!(classify(title), expected);
    }

    #[rstest]
    #[case("Example of a Benefit", ContentType::Benefits)]
    #[case("eXaMpLe of a bEnEfIt", ContentType::Benefits)]
    #[case("Disadvantages", ContentType::Benefits)]
    #[case("Drawback Example", ContentType::Drawbacks)]
    #[case("Code Features", ContentType::Example)]
    #[case("Types of Examples", ContentType::Example)]
    #[case("Type Definition", ContentType::Types)]
    #[case("Feature Definition", ContentType::Features)]
    fn test_classify_priority(#[case] title: &str, #[case] expected: ContentType) {
        assert_eq!(classify(title), expected);
    }

    #[test]
    fn test_classify_optional() {
        assert_eq!(classify_optional(None), ContentType::Default);
        assert_eq!(classify_optional(Some("Types")), ContentType::Types);
    }

    #[test]
    fn test_derive_child_wins() {
        assert_eq!(
            derive("Drawbacks", ContentType::Benefits),
            ContentType::Drawbacks
        );
        assert_eq!(derive("Misc", ContentType::Benefits), ContentType::Benefits);
        assert_eq!(derive("Misc", ContentType::Default), ContentType::Default);
    }

    #[test]
    fn test_round_trip_names() {
        for hint in ContentType::ALL {
            assert_eq!(hint.as_str().parse::<ContentType>(), Ok(hint));
        }
        assert!("nope".parse::<ContentType>().is_err());
        assert_eq!("Benefits".parse::<ContentType>(), Ok(ContentType::Benefits));
    }
}
