use helpdesk::api::{self, app_state::AppState};
use helpdesk::config::config::AppConfig;
use helpdesk::config::loader::{ConfigLoader, config_exists};
use helpdesk::models::rule::RuleCatalog;
use helpdesk::observability::{
    MetricsSink, ObservabilityState, create_observability_router, init_tracing,
};
use helpdesk::services::{
    create_fallback_classifier, create_intent_classifier, create_return_service,
    create_support_agent,
};
use helpdesk::services::entities::EntityExtractor;
use helpdesk::storage::memory::{
    InMemoryConversationLog, InMemoryFaqStore, InMemoryOrderStore, InMemoryProductStore,
};
use helpdesk::storage::repository::ProductStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("helpdesk");

    info!("Starting Helpdesk...");

    let config = if config_exists() {
        ConfigLoader::load()?
    } else {
        info!("No config.toml found, using development defaults");
        AppConfig::development()
    };
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let order_store = match &config.data.orders_file {
        Some(path) if path.exists() => Arc::new(InMemoryOrderStore::from_file(path)?),
        _ => Arc::new(InMemoryOrderStore::with_samples()),
    };
    let product_store = match &config.data.products_file {
        Some(path) if path.exists() => Arc::new(InMemoryProductStore::from_file(path)?),
        _ => Arc::new(InMemoryProductStore::with_samples()),
    };
    let faq_store = match &config.data.faq_file {
        Some(path) if path.exists() => Arc::new(InMemoryFaqStore::from_file(path)?),
        _ => Arc::new(InMemoryFaqStore::with_samples()),
    };
    let conversation_log = Arc::new(InMemoryConversationLog::new());
    info!("Domain stores initialized");

    let extractor = EntityExtractor::new(
        product_store.known_keywords().await?,
        product_store.known_categories().await?,
    );

    let fallback: Arc<_> = Arc::from(create_fallback_classifier(&config.fallback)?);
    info!(
        "Fallback classifier initialized (enabled: {})",
        config.fallback.enabled && !config.fallback.api_key.is_empty()
    );

    let classifier: Arc<_> = Arc::from(create_intent_classifier(
        RuleCatalog::builtin(),
        extractor,
        fallback,
        config.classifier.acceptance_threshold,
        Duration::from_secs(config.fallback.timeout),
    ));
    info!("Intent classifier initialized");

    let metrics = Arc::new(MetricsSink::new());

    let agent = create_support_agent(
        classifier,
        order_store.clone(),
        product_store.clone(),
        faq_store.clone(),
        conversation_log.clone(),
        metrics.clone(),
    );
    let return_service = create_return_service(order_store.clone());
    info!("Agent pipeline initialized");

    let app_state = AppState::new(
        agent,
        return_service,
        order_store,
        product_store,
        faq_store,
        conversation_log,
        metrics.clone(),
    );
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
