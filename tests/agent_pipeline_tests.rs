//! End-to-end pipeline tests
//!
//! Exercise the full agent path (normalize, classify, lookup, compose)
//! against the sample stores, including the external fallback classifier
//! behind a mock HTTP server.

use std::sync::Arc;
use std::time::Duration;

use helpdesk::config::config::FallbackConfig;
use helpdesk::models::rule::RuleCatalog;
use helpdesk::observability::{AnalyticsSink, MetricsSink};
use helpdesk::services::agent::{SupportAgent, create_support_agent};
use helpdesk::services::classifier::create_intent_classifier;
use helpdesk::services::entities::EntityExtractor;
use helpdesk::services::fallback::{DisabledFallback, FallbackClassifier, OpenAiFallback};
use helpdesk::storage::memory::{
    InMemoryConversationLog, InMemoryFaqStore, InMemoryOrderStore, InMemoryProductStore,
};
use helpdesk::storage::repository::ProductStore;
use rstest::rstest;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn build_agent(fallback: Arc<dyn FallbackClassifier>) -> Box<dyn SupportAgent> {
    let orders = Arc::new(InMemoryOrderStore::with_samples());
    let products = Arc::new(InMemoryProductStore::with_samples());
    let faq = Arc::new(InMemoryFaqStore::with_samples());

    let extractor = EntityExtractor::new(
        products.known_keywords().await.unwrap(),
        products.known_categories().await.unwrap(),
    );
    let classifier: Arc<_> = Arc::from(create_intent_classifier(
        RuleCatalog::builtin(),
        extractor,
        fallback,
        0.6,
        Duration::from_secs(2),
    ));

    create_support_agent(
        classifier,
        orders,
        products,
        faq,
        Arc::new(InMemoryConversationLog::new()),
        Arc::new(MetricsSink::new()),
    )
}

async fn offline_agent() -> Box<dyn SupportAgent> {
    build_agent(Arc::new(DisabledFallback)).await
}

#[rstest]
#[case::greeting("hi", "greeting")]
#[case::order_with_id("Where is my order 52768?", "order_status")]
#[case::return_request("I want to return order 52769", "return_request")]
#[case::product_price("what is the price of the rtx?", "product_info")]
#[case::store_hours("when are you open?", "store_hours")]
#[case::contact("how do I contact customer service?", "contact")]
#[case::goodbye("thanks, bye", "goodbye")]
#[tokio::test]
async fn test_intent_recognition_scenarios(#[case] message: &str, #[case] expected: &str) {
    let agent = offline_agent().await;
    let reply = agent.handle_message(message, None, None).await.unwrap();

    assert_eq!(reply.intent, expected, "message: {message}");
    assert!(!reply.reply.is_empty());
    assert!(!reply.suggested_actions.is_empty());
    assert!((0.0..=1.0).contains(&reply.confidence));
}

#[tokio::test]
async fn test_pipeline_is_total_over_arbitrary_input() {
    let agent = offline_agent().await;

    for message in ["", "   ", "!!!???", "asdf qwerty zxcv", "0"] {
        let reply = agent.handle_message(message, None, None).await.unwrap();
        assert!(!reply.reply.is_empty(), "message: {message:?}");
        assert!(!reply.suggested_actions.is_empty());
        assert!((0.0..=1.0).contains(&reply.confidence));
    }
}

#[tokio::test]
async fn test_same_input_gives_same_output() {
    let agent = offline_agent().await;

    let first = agent
        .handle_message("Where is my order 52768?", None, None)
        .await
        .unwrap();
    for _ in 0..5 {
        let again = agent
            .handle_message("Where is my order 52768?", None, None)
            .await
            .unwrap();
        assert_eq!(again.reply, first.reply);
        assert_eq!(again.intent, first.intent);
        assert_eq!(again.confidence, first.confidence);
        assert_eq!(again.suggested_actions, first.suggested_actions);
    }
}

#[tokio::test]
async fn test_three_reply_classes_are_distinguishable() {
    let agent = offline_agent().await;

    let clarification = agent
        .handle_message("where is my order", None, None)
        .await
        .unwrap();
    let not_found = agent
        .handle_message("where is my order 99999", None, None)
        .await
        .unwrap();
    let success = agent
        .handle_message("where is my order 52768", None, None)
        .await
        .unwrap();

    assert!(clarification.reply.contains("provide your order ID"));
    assert!(not_found.reply.contains("couldn't find order 99999"));
    assert!(success.reply.contains("In Transit"));
    assert_ne!(clarification.reply, not_found.reply);
    assert_ne!(not_found.reply, success.reply);
}

#[tokio::test]
async fn test_fallback_model_resolves_low_confidence_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "store_hours, 0.8"}}]
        })))
        .mount(&server)
        .await;

    let fallback = OpenAiFallback::new(&FallbackConfig {
        enabled: true,
        base_url: server.uri(),
        api_key: "test-key".into(),
        model: "gpt-3.5-turbo".into(),
        timeout: 2,
    })
    .unwrap();

    let agent = build_agent(Arc::new(fallback)).await;
    let reply = agent
        .handle_message("are y'all around later today", None, None)
        .await
        .unwrap();

    assert_eq!(reply.intent, "store_hours");
    assert!((reply.confidence - 0.8).abs() < 0.001);
    assert!(reply.reply.contains("store hours"));
}

#[tokio::test]
async fn test_fallback_outage_degrades_to_unknown_menu() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fallback = OpenAiFallback::new(&FallbackConfig {
        enabled: true,
        base_url: server.uri(),
        api_key: "test-key".into(),
        model: "gpt-3.5-turbo".into(),
        timeout: 2,
    })
    .unwrap();

    let agent = build_agent(Arc::new(fallback)).await;
    let reply = agent
        .handle_message("zzz unmatched text", None, None)
        .await
        .unwrap();

    assert_eq!(reply.intent, "unknown");
    assert_eq!(reply.confidence, 0.0);
    assert!(reply
        .suggested_actions
        .contains(&"Contact Support".to_string()));
}

#[tokio::test]
async fn test_customer_context_shapes_clarification() {
    let agent = offline_agent().await;

    let anonymous = agent
        .handle_message("where is my order", None, None)
        .await
        .unwrap();
    assert!(anonymous.reply.contains("provide your order ID"));

    let known = agent
        .handle_message("where is my order", Some("C1001"), None)
        .await
        .unwrap();
    assert!(known.reply.contains("recent orders"));
    assert!(known.reply.contains("52768"));
}

#[tokio::test]
async fn test_analytics_snapshot_tracks_pipeline() {
    let orders = Arc::new(InMemoryOrderStore::with_samples());
    let products = Arc::new(InMemoryProductStore::with_samples());
    let faq = Arc::new(InMemoryFaqStore::with_samples());
    let sink = Arc::new(MetricsSink::new());

    let extractor = EntityExtractor::new(
        products.known_keywords().await.unwrap(),
        products.known_categories().await.unwrap(),
    );
    let classifier: Arc<_> = Arc::from(create_intent_classifier(
        RuleCatalog::builtin(),
        extractor,
        Arc::new(DisabledFallback),
        0.6,
        Duration::from_secs(2),
    ));
    let agent = create_support_agent(
        classifier,
        orders,
        products,
        faq,
        Arc::new(InMemoryConversationLog::new()),
        sink.clone(),
    );

    agent.handle_message("hi", None, None).await.unwrap();
    agent
        .handle_message("zzz unmatched", None, None)
        .await
        .unwrap();

    let snapshot = sink.snapshot();
    assert_eq!(snapshot.messages_total, 2);
    assert_eq!(snapshot.fallback_total, 1);
    assert_eq!(snapshot.intent_counts.get("greeting"), Some(&1));
    assert_eq!(snapshot.intent_counts.get("unknown"), Some(&1));
}
