//! Entity Extractor
//!
//! Pulls structured values (order ids, product names, categories) out of a
//! message. Extraction is independent of intent classification: the same
//! entities are merged into the result whichever branch produced the intent.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::models::classification::EntityKind;
use crate::services::normalizer::NormalizedText;

/// "order 52768", "order id 52768", "orderid 52768" — the id token must
/// contain a digit so "order status" is not captured as an id.
static ORDER_ID_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\border\s*(?:id)?\s+([a-z]*\d[a-z0-9-]*)\b").expect("valid order id regex")
});

/// Quoted product name in the raw text, e.g. tell me about "Shield TV"
static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("valid quoted span regex"));

/// Entity extractor over a fixed product catalog
///
/// Keyword and category lists come from the product store at startup and
/// stay read-only while serving.
pub struct EntityExtractor {
    product_keywords: Vec<String>,
    categories: Vec<String>,
}

impl EntityExtractor {
    /// Create an extractor from lowercased catalog keywords and categories
    pub fn new(product_keywords: Vec<String>, categories: Vec<String>) -> Self {
        Self {
            product_keywords,
            categories,
        }
    }

    /// Extract all recognizable entities from a message
    pub fn extract(&self, raw: &str, normalized: &NormalizedText) -> HashMap<EntityKind, String> {
        let mut entities = HashMap::new();

        if let Some(order_id) = self.extract_order_id(normalized) {
            entities.insert(EntityKind::OrderId, order_id);
        }

        if let Some(product_name) = self.extract_product_name(raw, normalized) {
            entities.insert(EntityKind::ProductName, product_name);
        }

        if let Some(category) = self.extract_category(normalized) {
            entities.insert(EntityKind::Category, category);
        }

        entities
    }

    /// Order id: "order <id>" phrasing first, then any standalone token of
    /// four or more digits.
    fn extract_order_id(&self, normalized: &NormalizedText) -> Option<String> {
        if let Some(captures) = ORDER_ID_PHRASE.captures(&normalized.text) {
            return Some(captures[1].to_string());
        }

        normalized
            .tokens
            .iter()
            .find(|t| t.len() >= 4 && t.chars().all(|c| c.is_ascii_digit()))
            .cloned()
    }

    /// Product name: quoted span in the raw text wins, otherwise the first
    /// catalog keyword present in the message.
    fn extract_product_name(&self, raw: &str, normalized: &NormalizedText) -> Option<String> {
        if let Some(captures) = QUOTED_SPAN.captures(raw) {
            let quoted = captures[1].trim();
            if !quoted.is_empty() {
                return Some(quoted.to_string());
            }
        }

        self.product_keywords
            .iter()
            .find(|keyword| normalized.tokens.iter().any(|t| t == *keyword))
            .cloned()
    }

    fn extract_category(&self, normalized: &NormalizedText) -> Option<String> {
        self.categories
            .iter()
            .find(|category| normalized.text.contains(category.as_str()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizer::normalize;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(
            vec!["rtx".into(), "shield".into(), "jetson".into(), "4090".into()],
            vec!["graphics cards".into(), "streaming".into()],
        )
    }

    #[test]
    fn test_order_id_from_phrase() {
        let raw = "Where is my order 52768?";
        let entities = extractor().extract(raw, &normalize(raw));
        assert_eq!(entities.get(&EntityKind::OrderId).map(String::as_str), Some("52768"));
    }

    #[test]
    fn test_order_id_with_id_keyword() {
        let raw = "order id: 9981";
        let entities = extractor().extract(raw, &normalize(raw));
        assert_eq!(entities.get(&EntityKind::OrderId).map(String::as_str), Some("9981"));
    }

    #[test]
    fn test_bare_numeric_token_counts_as_order_id() {
        let raw = "any news on 52768";
        let entities = extractor().extract(raw, &normalize(raw));
        assert_eq!(entities.get(&EntityKind::OrderId).map(String::as_str), Some("52768"));
    }

    #[test]
    fn test_order_status_word_is_not_an_id() {
        let raw = "where is my order";
        let entities = extractor().extract(raw, &normalize(raw));
        assert!(!entities.contains_key(&EntityKind::OrderId));

        let raw = "what is my order status";
        let entities = extractor().extract(raw, &normalize(raw));
        assert!(!entities.contains_key(&EntityKind::OrderId));
    }

    #[test]
    fn test_quoted_product_name_wins() {
        let raw = r#"tell me about "Shield TV Pro""#;
        let entities = extractor().extract(raw, &normalize(raw));
        assert_eq!(
            entities.get(&EntityKind::ProductName).map(String::as_str),
            Some("Shield TV Pro")
        );
    }

    #[test]
    fn test_catalog_keyword_product_name() {
        let raw = "how much is the RTX?";
        let entities = extractor().extract(raw, &normalize(raw));
        assert_eq!(entities.get(&EntityKind::ProductName).map(String::as_str), Some("rtx"));
    }

    #[test]
    fn test_category_extraction() {
        let raw = "show me graphics cards";
        let entities = extractor().extract(raw, &normalize(raw));
        assert_eq!(
            entities.get(&EntityKind::Category).map(String::as_str),
            Some("graphics cards")
        );
    }

    #[test]
    fn test_empty_input_yields_no_entities() {
        let entities = extractor().extract("", &normalize(""));
        assert!(entities.is_empty());
    }
}
