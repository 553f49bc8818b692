//! Text Normalizer
//!
//! Turns raw user text into a lowercased, whitespace-collapsed,
//! punctuation-stripped form plus its token sequence. Total on any input;
//! empty input yields an empty text and no tokens.

/// Normalized view of a user message
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedText {
    /// Normalized text with single-space separators
    pub text: String,
    /// Tokens in order of appearance
    pub tokens: Vec<String>,
}

impl NormalizedText {
    /// True when normalization produced nothing to classify
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Normalize raw user input
///
/// Lowercases, drops punctuation (keeping alphanumerics, whitespace and
/// in-word hyphens) and collapses whitespace runs. No locale-dependent
/// behavior beyond Unicode lowercasing.
pub fn normalize(raw: &str) -> NormalizedText {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .map(|t| t.trim_matches('-'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();

    NormalizedText {
        text: tokens.join(" "),
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalized = normalize("Where is my ORDER 52768?!");
        assert_eq!(normalized.text, "where is my order 52768");
        assert_eq!(
            normalized.tokens,
            vec!["where", "is", "my", "order", "52768"]
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        let normalized = normalize("  hello\t\n   world  ");
        assert_eq!(normalized.text, "hello world");
        assert_eq!(normalized.tokens.len(), 2);
    }

    #[test]
    fn test_empty_input_is_total() {
        let normalized = normalize("");
        assert!(normalized.is_empty());
        assert!(normalized.tokens.is_empty());

        let punctuation_only = normalize("?!...,;");
        assert!(punctuation_only.is_empty());
    }

    #[test]
    fn test_keeps_in_word_hyphens() {
        let normalized = normalize("long-term plan");
        assert_eq!(normalized.tokens, vec!["long-term", "plan"]);
    }

    #[test]
    fn test_deterministic() {
        let a = normalize("Hi there, HOW are you?");
        let b = normalize("Hi there, HOW are you?");
        assert_eq!(a, b);
    }
}
