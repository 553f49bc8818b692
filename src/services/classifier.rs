//! Intent Classifier
//!
//! Maps normalized text to an intent and confidence score. Rule matching
//! runs first in a fixed priority order; when the best confidence falls
//! below the acceptance threshold a single time-bounded call to the external
//! fallback classifier is attempted. Classification is total: every input,
//! including the empty string, produces a `ClassificationResult`.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::classification::ClassificationResult;
use crate::models::intent::Intent;
use crate::models::rule::{PatternRule, RuleCatalog};
use crate::services::entities::EntityExtractor;
use crate::services::fallback::FallbackClassifier;
use crate::services::normalizer::NormalizedText;

/// Intent classification service
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify a message; never fails, degrades to `unknown` instead
    async fn classify(&self, raw: &str, normalized: &NormalizedText) -> ClassificationResult;

    /// The configured acceptance threshold
    fn acceptance_threshold(&self) -> f32;
}

/// Rule-first classifier with an external fallback
pub struct IntentClassifierImpl {
    catalog: RuleCatalog,
    extractor: EntityExtractor,
    fallback: Arc<dyn FallbackClassifier>,
    acceptance_threshold: f32,
    fallback_timeout: Duration,
}

impl IntentClassifierImpl {
    /// Create a classifier over a fixed rule catalog
    pub fn new(
        catalog: RuleCatalog,
        extractor: EntityExtractor,
        fallback: Arc<dyn FallbackClassifier>,
        acceptance_threshold: f32,
        fallback_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            extractor,
            fallback,
            acceptance_threshold: acceptance_threshold.clamp(0.0, 1.0),
            fallback_timeout,
        }
    }

    /// A rule matches when any of its patterns is found in the text:
    /// multi-word patterns as substrings, single words as whole tokens.
    fn rule_matches(rule: &PatternRule, normalized: &NormalizedText) -> bool {
        rule.patterns.iter().any(|pattern| {
            if pattern.contains(' ') {
                normalized.text.contains(pattern.as_str())
            } else {
                normalized.tokens.iter().any(|t| t == pattern)
            }
        })
    }

    /// Best-confidence rule with ties broken by registration order
    fn match_rules(&self, normalized: &NormalizedText) -> Option<(Intent, f32)> {
        let mut best: Option<(usize, Intent, f32)> = None;

        for (priority, rule) in self.catalog.iter() {
            if !Self::rule_matches(rule, normalized) {
                continue;
            }

            let replace = match best {
                None => true,
                // 严格大于：先注册的规则在同分时胜出
                Some((_, _, best_confidence)) => rule.base_confidence > best_confidence,
            };

            if replace {
                best = Some((priority, rule.intent, rule.base_confidence));
            }
        }

        best.map(|(_, intent, confidence)| (intent, confidence))
    }

    /// Single fallback attempt, bounded by the configured timeout
    async fn classify_with_fallback(&self, normalized: &NormalizedText) -> ClassificationResult {
        let call = self
            .fallback
            .classify(&normalized.text, &Intent::ALL);

        match tokio::time::timeout(self.fallback_timeout, call).await {
            Ok(Ok((Intent::Unknown, _))) => ClassificationResult::unknown(),
            Ok(Ok((intent, confidence))) => {
                debug!("Fallback classified as {} ({:.2})", intent, confidence);
                ClassificationResult::from_fallback(intent, confidence)
            }
            Ok(Err(e)) => {
                warn!("Fallback classification failed: {}", e);
                ClassificationResult::unknown()
            }
            Err(_) => {
                warn!(
                    "Fallback classification timed out after {:?}",
                    self.fallback_timeout
                );
                ClassificationResult::unknown()
            }
        }
    }
}

#[async_trait]
impl IntentClassifier for IntentClassifierImpl {
    async fn classify(&self, raw: &str, normalized: &NormalizedText) -> ClassificationResult {
        let pattern_result = self.match_rules(normalized);

        let result = match pattern_result {
            Some((intent, confidence)) if confidence >= self.acceptance_threshold => {
                debug!("Pattern matched {} ({:.2})", intent, confidence);
                ClassificationResult::from_pattern(intent, confidence)
            }
            _ => self.classify_with_fallback(normalized).await,
        };

        // 实体提取与意图分支无关
        let entities = self.extractor.extract(raw, normalized);
        result.with_entities(entities)
    }

    fn acceptance_threshold(&self) -> f32 {
        self.acceptance_threshold
    }
}

/// Create an intent classifier service
pub fn create_intent_classifier(
    catalog: RuleCatalog,
    extractor: EntityExtractor,
    fallback: Arc<dyn FallbackClassifier>,
    acceptance_threshold: f32,
    fallback_timeout: Duration,
) -> Box<dyn IntentClassifier> {
    Box::new(IntentClassifierImpl::new(
        catalog,
        extractor,
        fallback,
        acceptance_threshold,
        fallback_timeout,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::models::classification::{ClassificationSource, EntityKind};
    use crate::services::normalizer::normalize;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FailingFallback {
        calls: AtomicU32,
    }

    impl FailingFallback {
        fn new() -> Self {
            Self {
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl FallbackClassifier for FailingFallback {
        async fn classify(&self, _text: &str, _allowed: &[Intent]) -> Result<(Intent, f32)> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Fallback("unavailable".to_string()))
        }
    }

    struct FixedFallback {
        intent: Intent,
        confidence: f32,
    }

    #[async_trait]
    impl FallbackClassifier for FixedFallback {
        async fn classify(&self, _text: &str, _allowed: &[Intent]) -> Result<(Intent, f32)> {
            Ok((self.intent, self.confidence))
        }
    }

    struct SlowFallback;

    #[async_trait]
    impl FallbackClassifier for SlowFallback {
        async fn classify(&self, _text: &str, _allowed: &[Intent]) -> Result<(Intent, f32)> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok((Intent::Faq, 0.9))
        }
    }

    fn classifier_with(fallback: Arc<dyn FallbackClassifier>) -> IntentClassifierImpl {
        IntentClassifierImpl::new(
            RuleCatalog::builtin(),
            EntityExtractor::new(
                vec!["rtx".into(), "shield".into()],
                vec!["graphics cards".into()],
            ),
            fallback,
            0.6,
            Duration::from_millis(100),
        )
    }

    #[tokio::test]
    async fn test_pattern_match_skips_fallback() {
        let fallback = Arc::new(FailingFallback::new());
        let classifier = classifier_with(fallback.clone());

        let raw = "Where is my order 52768?";
        let result = classifier.classify(raw, &normalize(raw)).await;

        assert_eq!(result.intent, Intent::OrderStatus);
        assert_eq!(result.source, ClassificationSource::Pattern);
        assert!(result.confidence >= 0.6);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_match_invokes_fallback_once() {
        let fallback = Arc::new(FailingFallback::new());
        let classifier = classifier_with(fallback.clone());

        let raw = "asdf qwerty zxcv";
        let result = classifier.classify(raw, &normalize(raw)).await;

        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.source, ClassificationSource::FallbackModel);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fallback_success_is_used() {
        let fallback = Arc::new(FixedFallback {
            intent: Intent::Faq,
            confidence: 0.85,
        });
        let classifier = classifier_with(fallback);

        let raw = "something unmatched";
        let result = classifier.classify(raw, &normalize(raw)).await;

        assert_eq!(result.intent, Intent::Faq);
        assert_eq!(result.source, ClassificationSource::FallbackModel);
        assert!((result.confidence - 0.85).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_fallback_confidence_clamped() {
        let fallback = Arc::new(FixedFallback {
            intent: Intent::Faq,
            confidence: 3.0,
        });
        let classifier = classifier_with(fallback);

        let raw = "something unmatched";
        let result = classifier.classify(raw, &normalize(raw)).await;
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_fallback_unknown_degrades_to_zero() {
        let fallback = Arc::new(FixedFallback {
            intent: Intent::Unknown,
            confidence: 0.9,
        });
        let classifier = classifier_with(fallback);

        let raw = "something unmatched";
        let result = classifier.classify(raw, &normalize(raw)).await;

        // unknown 的置信度必须低于接受阈值
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_timeout_degrades_to_unknown() {
        let classifier = classifier_with(Arc::new(SlowFallback));

        let raw = "something unmatched";
        let result = classifier.classify(raw, &normalize(raw)).await;

        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.source, ClassificationSource::FallbackModel);
    }

    #[tokio::test]
    async fn test_empty_input_is_total() {
        let fallback = Arc::new(FailingFallback::new());
        let classifier = classifier_with(fallback.clone());

        let result = classifier.classify("", &normalize("")).await;

        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_greeting_checked_after_specific_intents() {
        let classifier = classifier_with(Arc::new(FailingFallback::new()));

        // "hi" 只命中 greeting
        let result = classifier.classify("hi", &normalize("hi")).await;
        assert_eq!(result.intent, Intent::Greeting);
        assert!((result.confidence - 0.7).abs() < f32::EPSILON);

        // 同时包含问候与订单查询时，更高置信度的具体意图胜出
        let raw = "hi, where is my order 52768?";
        let result = classifier.classify(raw, &normalize(raw)).await;
        assert_eq!(result.intent, Intent::OrderStatus);
    }

    #[tokio::test]
    async fn test_priority_determinism() {
        let classifier = classifier_with(Arc::new(FailingFallback::new()));

        let raw = "hello, goodbye";
        let first = classifier.classify(raw, &normalize(raw)).await;
        for _ in 0..10 {
            let again = classifier.classify(raw, &normalize(raw)).await;
            assert_eq!(again.intent, first.intent);
        }
        // greeting 与 goodbye 同分，先注册的 greeting 胜出
        assert_eq!(first.intent, Intent::Greeting);
    }

    #[tokio::test]
    async fn test_entities_merged_on_both_branches() {
        let raw = "rtx 52768";

        // 规则分支（含 price 关键词使规则命中）
        let pattern_raw = "what is the price of the rtx, order 52768";
        let classifier = classifier_with(Arc::new(FailingFallback::new()));
        let pattern_result = classifier
            .classify(pattern_raw, &normalize(pattern_raw))
            .await;
        assert_eq!(pattern_result.source, ClassificationSource::Pattern);
        assert_eq!(pattern_result.entity(EntityKind::OrderId), Some("52768"));

        // 退化分支
        let fallback_result = classifier.classify(raw, &normalize(raw)).await;
        assert_eq!(fallback_result.source, ClassificationSource::FallbackModel);
        assert_eq!(fallback_result.entity(EntityKind::OrderId), Some("52768"));
        assert_eq!(fallback_result.entity(EntityKind::ProductName), Some("rtx"));
    }
}
