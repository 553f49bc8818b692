//! Return Service
//!
//! Processes return requests against the order store. Only delivered orders
//! are eligible; an ineligible order yields a rejected receipt rather than
//! an error, so the caller can relay the reason to the customer.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::order::{ReturnReceipt, ReturnStatus};
use crate::storage::repository::OrderStore;

/// Return request processing service
#[async_trait]
pub trait ReturnService: Send + Sync {
    /// Request a return for an order, with the customer's stated reason
    async fn process_return(&self, order_id: &str, reason: &str) -> Result<ReturnReceipt>;
}

/// Order-store backed return service
pub struct ReturnServiceImpl {
    orders: Arc<dyn OrderStore>,
}

impl ReturnServiceImpl {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }

    /// 退货单编号：RET-<订单号>-<yyyymmdd>
    fn make_return_id(order_id: &str) -> String {
        format!("RET-{}-{}", order_id, Utc::now().format("%Y%m%d"))
    }
}

#[async_trait]
impl ReturnService for ReturnServiceImpl {
    async fn process_return(&self, order_id: &str, reason: &str) -> Result<ReturnReceipt> {
        let order = self
            .orders
            .get_order(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("订单不存在: {}", order_id)))?;

        if !order.is_return_eligible() {
            return Ok(ReturnReceipt {
                return_id: String::new(),
                status: ReturnStatus::Rejected,
                message: format!(
                    "Order {} is currently {}. Returns are only available for delivered orders.",
                    order.order_id, order.status
                ),
                estimated_refund: None,
            });
        }

        let return_id = Self::make_return_id(&order.order_id);
        info!(
            "Return {} requested for order {} (reason: {})",
            return_id, order.order_id, reason
        );

        Ok(ReturnReceipt {
            return_id,
            status: ReturnStatus::Requested,
            message: format!(
                "Return request for order {} has been submitted. You will receive a \
                 confirmation email shortly.",
                order.order_id
            ),
            estimated_refund: Some(order.order_amount),
        })
    }
}

/// Create a return service
pub fn create_return_service(orders: Arc<dyn OrderStore>) -> Box<dyn ReturnService> {
    Box::new(ReturnServiceImpl::new(orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryOrderStore;

    fn service() -> ReturnServiceImpl {
        ReturnServiceImpl::new(Arc::new(InMemoryOrderStore::with_samples()))
    }

    #[tokio::test]
    async fn test_delivered_order_is_accepted() {
        let receipt = service()
            .process_return("52769", "arrived damaged")
            .await
            .unwrap();

        assert_eq!(receipt.status, ReturnStatus::Requested);
        let expected_prefix = format!("RET-52769-{}", Utc::now().format("%Y%m%d"));
        assert_eq!(receipt.return_id, expected_prefix);
        assert!(receipt.estimated_refund.is_some());
    }

    #[tokio::test]
    async fn test_undelivered_order_is_rejected() {
        let receipt = service()
            .process_return("52768", "changed my mind")
            .await
            .unwrap();

        assert_eq!(receipt.status, ReturnStatus::Rejected);
        assert!(receipt.return_id.is_empty());
        assert!(receipt.estimated_refund.is_none());
        assert!(receipt.message.contains("delivered"));
    }

    #[tokio::test]
    async fn test_missing_order_is_an_error() {
        let result = service().process_return("99999", "whatever").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
