//! Repository traits for domain data access
//!
//! The pipeline only performs single-key, read-only lookups against data
//! that is immutable for the duration of a request. Writes happen outside
//! this service; the conversation log is the one append-only exception.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::conversation::ConversationTurn;
use crate::models::faq::FaqEntry;
use crate::models::order::Order;
use crate::models::product::Product;

/// Product search parameters
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Free-text query matched against name and description
    pub query: Option<String>,

    /// Exact category filter
    pub category: Option<String>,

    /// Maximum number of results
    pub limit: usize,
}

/// Read-only order lookups
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Get an order by its order id
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>>;

    /// List orders belonging to a customer, most recent first
    async fn get_orders_by_customer(&self, customer_id: &str) -> Result<Vec<Order>>;
}

/// Read-only product lookups
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Search products by query and/or category, ordered by name
    async fn search_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;

    /// Known product keywords for entity extraction (lowercased)
    async fn known_keywords(&self) -> Result<Vec<String>>;

    /// Known category names (lowercased)
    async fn known_categories(&self) -> Result<Vec<String>>;
}

/// Read-only FAQ lookups
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Find the first FAQ entry whose tags match the normalized text
    async fn find_answer(&self, normalized_text: &str) -> Result<Option<FaqEntry>>;

    /// List all FAQ entries
    async fn list(&self) -> Result<Vec<FaqEntry>>;
}

/// Session-scoped conversation log
#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Append a turn to the session log
    async fn append(&self, turn: ConversationTurn) -> Result<()>;

    /// List all turns recorded for a session
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<ConversationTurn>>;
}
