use crate::observability::AnalyticsSink;
use crate::services::agent::SupportAgent;
use crate::services::returns::ReturnService;
use crate::storage::repository::{ConversationLog, FaqStore, OrderStore, ProductStore};
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Chat pipeline agent
    pub agent: Arc<dyn SupportAgent>,
    /// Return request processing
    pub return_service: Arc<dyn ReturnService>,
    /// Order lookups
    pub order_store: Arc<dyn OrderStore>,
    /// Product lookups
    pub product_store: Arc<dyn ProductStore>,
    /// FAQ lookups
    pub faq_store: Arc<dyn FaqStore>,
    /// Session-scoped conversation history
    pub conversation_log: Arc<dyn ConversationLog>,
    /// Analytics aggregate view
    pub analytics: Arc<dyn AnalyticsSink>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("agent", &"Arc<dyn SupportAgent>")
            .field("return_service", &"Arc<dyn ReturnService>")
            .field("order_store", &"Arc<dyn OrderStore>")
            .field("product_store", &"Arc<dyn ProductStore>")
            .field("faq_store", &"Arc<dyn FaqStore>")
            .field("conversation_log", &"Arc<dyn ConversationLog>")
            .field("analytics", &"Arc<dyn AnalyticsSink>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        agent: Box<dyn SupportAgent>,
        return_service: Box<dyn ReturnService>,
        order_store: Arc<dyn OrderStore>,
        product_store: Arc<dyn ProductStore>,
        faq_store: Arc<dyn FaqStore>,
        conversation_log: Arc<dyn ConversationLog>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            agent: Arc::from(agent),
            return_service: Arc::from(return_service),
            order_store,
            product_store,
            faq_store,
            conversation_log,
            analytics,
        }
    }
}
