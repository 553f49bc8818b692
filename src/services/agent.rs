//! Support Agent
//!
//! Orchestrates the message pipeline: normalize, classify, run the domain
//! lookups the intent calls for, compose the reply, then log the turn and
//! report one analytics event. The pipeline is total over text input; only
//! infrastructure failures surface as errors.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;
use crate::models::classification::{ClassificationResult, EntityKind};
use crate::models::conversation::{ChatReply, ConversationTurn};
use crate::models::intent::Intent;
use crate::observability::{AnalyticsEvent, AnalyticsSink};
use crate::services::classifier::IntentClassifier;
use crate::services::composer::{DomainLookups, ResponseComposer};
use crate::services::normalizer::normalize;
use crate::storage::repository::{
    ConversationLog, FaqStore, OrderStore, ProductQuery, ProductStore,
};

/// Customer support conversation agent
#[async_trait]
pub trait SupportAgent: Send + Sync {
    /// Handle one customer message and produce a reply
    async fn handle_message(
        &self,
        text: &str,
        customer_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<ChatReply>;
}

/// Pipeline implementation over the domain stores
pub struct SupportAgentImpl {
    classifier: Arc<dyn IntentClassifier>,
    composer: ResponseComposer,
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
    faq: Arc<dyn FaqStore>,
    conversation_log: Arc<dyn ConversationLog>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl SupportAgentImpl {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        orders: Arc<dyn OrderStore>,
        products: Arc<dyn ProductStore>,
        faq: Arc<dyn FaqStore>,
        conversation_log: Arc<dyn ConversationLog>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            classifier,
            composer: ResponseComposer::new(),
            orders,
            products,
            faq,
            conversation_log,
            analytics,
        }
    }

    /// Run only the lookups the classified intent calls for. A missing
    /// required entity means no lookup is attempted at all; the composer
    /// turns that into a clarification.
    async fn run_lookups(
        &self,
        result: &ClassificationResult,
        normalized_text: &str,
        customer_id: Option<&str>,
    ) -> Result<DomainLookups> {
        let mut lookups = DomainLookups::default();

        match result.intent {
            Intent::OrderStatus => {
                if let Some(order_id) = result.entity(EntityKind::OrderId) {
                    lookups.order = self.orders.get_order(order_id).await?;
                } else if let Some(customer_id) = customer_id {
                    lookups.recent_orders =
                        self.orders.get_orders_by_customer(customer_id).await?;
                }
            }
            Intent::ReturnRequest => {
                if let Some(order_id) = result.entity(EntityKind::OrderId) {
                    lookups.order = self.orders.get_order(order_id).await?;
                }
            }
            Intent::ProductInfo => {
                let query = result.entity(EntityKind::ProductName).map(str::to_string);
                let category = result.entity(EntityKind::Category).map(str::to_string);
                if query.is_some() || category.is_some() {
                    lookups.products = self
                        .products
                        .search_products(&ProductQuery {
                            query,
                            category,
                            limit: 5,
                        })
                        .await?;
                }
            }
            Intent::Faq => {
                lookups.faq = self.faq.find_answer(normalized_text).await?;
            }
            _ => {}
        }

        Ok(lookups)
    }

    async fn run_pipeline(
        &self,
        text: &str,
        customer_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<ChatReply> {
        let started = Instant::now();

        let normalized = normalize(text);
        let classification = self.classifier.classify(text, &normalized).await;
        debug!(
            "Classified as {} ({:.2}, {:?})",
            classification.intent, classification.confidence, classification.source
        );

        let lookups = self
            .run_lookups(&classification, &normalized.text, customer_id)
            .await?;
        let composed = self.composer.compose(&classification, &lookups);

        let session_id = session_id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        self.conversation_log
            .append(ConversationTurn {
                session_id,
                customer_id: customer_id.map(str::to_string),
                user_text: text.to_string(),
                classification: classification.clone(),
                reply_text: composed.reply_text.clone(),
                suggested_actions: composed.suggested_actions.clone(),
                timestamp: Utc::now(),
            })
            .await?;

        let duration_ms = started.elapsed().as_millis() as u64;
        self.analytics.record_turn(&AnalyticsEvent {
            intent: classification.intent,
            confidence: classification.confidence,
            source: classification.source,
            duration_ms,
        });
        info!(
            "Handled message in {}ms (intent: {})",
            duration_ms, classification.intent
        );

        Ok(ChatReply {
            reply: composed.reply_text,
            intent: classification.intent.as_str().to_string(),
            confidence: classification.confidence,
            suggested_actions: composed.suggested_actions,
        })
    }
}

#[async_trait]
impl SupportAgent for SupportAgentImpl {
    async fn handle_message(
        &self,
        text: &str,
        customer_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<ChatReply> {
        let result = self.run_pipeline(text, customer_id, session_id).await;
        if result.is_err() {
            self.analytics.record_error();
        }
        result
    }
}

/// Create a support agent service
pub fn create_support_agent(
    classifier: Arc<dyn IntentClassifier>,
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
    faq: Arc<dyn FaqStore>,
    conversation_log: Arc<dyn ConversationLog>,
    analytics: Arc<dyn AnalyticsSink>,
) -> Box<dyn SupportAgent> {
    Box::new(SupportAgentImpl::new(
        classifier,
        orders,
        products,
        faq,
        conversation_log,
        analytics,
    ))
}
