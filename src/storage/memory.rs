//! In-memory store implementations
//!
//! Loaded once at startup from JSON data files (or the built-in samples)
//! and never mutated while serving. The conversation log is the only
//! structure that grows at runtime.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use dashmap::DashMap;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::conversation::ConversationTurn;
use crate::models::faq::FaqEntry;
use crate::models::order::{Order, OrderStatus};
use crate::models::product::Product;
use crate::storage::repository::{
    ConversationLog, FaqStore, OrderStore, ProductQuery, ProductStore,
};

/// In-memory order store
pub struct InMemoryOrderStore {
    orders: Vec<Order>,
}

impl InMemoryOrderStore {
    /// Build a store from a fixed order list
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Load orders from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Store(format!("读取订单数据失败 {}: {}", path.display(), e)))?;
        let orders: Vec<Order> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} orders from {}", orders.len(), path.display());
        Ok(Self::new(orders))
    }

    /// Built-in sample orders for development
    pub fn with_samples() -> Self {
        let orders = vec![
            Order {
                order_id: "52768".into(),
                customer_id: "C1001".into(),
                product_name: "GeForce RTX 4090".into(),
                order_date: Utc.with_ymd_and_hms(2026, 8, 2, 14, 30, 0).unwrap(),
                quantity: 1,
                order_amount: 1599.0,
                status: OrderStatus::InTransit,
                return_status: None,
                return_reason: None,
                notes: None,
            },
            Order {
                order_id: "52769".into(),
                customer_id: "C1001".into(),
                product_name: "Shield TV Pro".into(),
                order_date: Utc.with_ymd_and_hms(2026, 7, 18, 9, 12, 0).unwrap(),
                quantity: 2,
                order_amount: 399.98,
                status: OrderStatus::Delivered,
                return_status: None,
                return_reason: None,
                notes: None,
            },
            Order {
                order_id: "52770".into(),
                customer_id: "C1002".into(),
                product_name: "Jetson Nano Developer Kit".into(),
                order_date: Utc.with_ymd_and_hms(2026, 6, 5, 17, 45, 0).unwrap(),
                quantity: 1,
                order_amount: 99.0,
                status: OrderStatus::Cancelled,
                return_status: None,
                return_reason: None,
                notes: Some("Cancelled by customer".into()),
            },
        ];
        Self::new(orders)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>> {
        Ok(self.orders.iter().find(|o| o.order_id == order_id).cloned())
    }

    async fn get_orders_by_customer(&self, customer_id: &str) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }
}

/// In-memory product store
pub struct InMemoryProductStore {
    products: Vec<Product>,
}

impl InMemoryProductStore {
    /// Build a store from a fixed product list
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load products from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Store(format!("读取商品数据失败 {}: {}", path.display(), e)))?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} products from {}", products.len(), path.display());
        Ok(Self::new(products))
    }

    /// Built-in sample products for development
    pub fn with_samples() -> Self {
        let products = vec![
            Product {
                name: "GeForce RTX 4090".into(),
                category: "Graphics Cards".into(),
                subcategory: "GeForce".into(),
                description: "Flagship GPU for gaming and content creation".into(),
                price: 1599.0,
                availability: true,
            },
            Product {
                name: "GeForce RTX 4080".into(),
                category: "Graphics Cards".into(),
                subcategory: "GeForce".into(),
                description: "High-end GPU for 4K gaming".into(),
                price: 1199.0,
                availability: true,
            },
            Product {
                name: "Shield TV Pro".into(),
                category: "Streaming".into(),
                subcategory: "Shield".into(),
                description: "4K HDR streaming media player".into(),
                price: 199.99,
                availability: true,
            },
            Product {
                name: "Jetson Nano Developer Kit".into(),
                category: "Embedded".into(),
                subcategory: "Jetson".into(),
                description: "Small AI computer for embedded applications".into(),
                price: 99.0,
                availability: true,
            },
        ];
        Self::new(products)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn search_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let limit = if query.limit == 0 { 10 } else { query.limit };

        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                if let Some(category) = &query.category {
                    if !p.category.eq_ignore_ascii_case(category) {
                        return false;
                    }
                }
                if let Some(q) = &query.query {
                    if !q.is_empty() && !p.matches(q) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches.truncate(limit);
        Ok(matches)
    }

    async fn known_keywords(&self) -> Result<Vec<String>> {
        let mut keywords: Vec<String> = Vec::new();

        for product in &self.products {
            for word in product.name.split_whitespace() {
                let word = word.to_lowercase();
                if word.len() > 2 && !keywords.contains(&word) {
                    keywords.push(word);
                }
            }
            let subcategory = product.subcategory.to_lowercase();
            if !subcategory.is_empty() && !keywords.contains(&subcategory) {
                keywords.push(subcategory);
            }
        }

        Ok(keywords)
    }

    async fn known_categories(&self) -> Result<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            let category = product.category.to_lowercase();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        Ok(categories)
    }
}

/// In-memory FAQ store
pub struct InMemoryFaqStore {
    entries: Vec<FaqEntry>,
}

impl InMemoryFaqStore {
    /// Build a store from a fixed entry list
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// Load FAQ entries from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Store(format!("读取 FAQ 数据失败 {}: {}", path.display(), e)))?;
        let entries: Vec<FaqEntry> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} FAQ entries from {}", entries.len(), path.display());
        Ok(Self::new(entries))
    }

    /// Built-in FAQ entries
    pub fn with_samples() -> Self {
        let entries = vec![
            FaqEntry {
                question: "What is your return policy?".into(),
                answer: "We accept returns within 30 days of purchase. Items must be in \
                         original condition with tags attached."
                    .into(),
                category: "returns".into(),
                tags: vec!["return policy".into(), "refund".into()],
            },
            FaqEntry {
                question: "How much is shipping?".into(),
                answer: "We offer free shipping on orders over $50. Standard delivery takes \
                         3-5 business days."
                    .into(),
                category: "shipping".into(),
                tags: vec!["shipping".into(), "delivery".into()],
            },
            FaqEntry {
                question: "What payment methods do you accept?".into(),
                answer: "We accept all major credit cards, PayPal, and bank transfers.".into(),
                category: "payment".into(),
                tags: vec!["payment".into(), "credit card".into(), "paypal".into()],
            },
            FaqEntry {
                question: "Do products come with a warranty?".into(),
                answer: "All products come with a 1-year manufacturer warranty.".into(),
                category: "warranty".into(),
                tags: vec!["warranty".into(), "guarantee".into()],
            },
        ];
        Self::new(entries)
    }
}

#[async_trait]
impl FaqStore for InMemoryFaqStore {
    async fn find_answer(&self, normalized_text: &str) -> Result<Option<FaqEntry>> {
        Ok(self
            .entries
            .iter()
            .find(|entry| entry.matches(normalized_text))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<FaqEntry>> {
        Ok(self.entries.clone())
    }
}

/// In-memory conversation log keyed by session id
#[derive(Default)]
pub struct InMemoryConversationLog {
    sessions: DashMap<String, Vec<ConversationTurn>>,
}

impl InMemoryConversationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationLog for InMemoryConversationLog {
    async fn append(&self, turn: ConversationTurn) -> Result<()> {
        self.sessions
            .entry(turn.session_id.clone())
            .or_default()
            .push(turn);
        Ok(())
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<ConversationTurn>> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|turns| turns.clone())
            .unwrap_or_default())
    }
}
