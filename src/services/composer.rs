//! Response Composer
//!
//! Turns a classification result plus domain lookups into the reply text and
//! an ordered list of suggested actions. The composer only decides phrasing;
//! it never alters the classification confidence. For every lookup-bearing
//! intent three reply classes are distinguishable: clarification (required
//! entity missing, nothing was looked up), not-found (entity present but the
//! lookup came back empty) and success.

use crate::models::classification::{ClassificationResult, EntityKind};
use crate::models::faq::FaqEntry;
use crate::models::intent::Intent;
use crate::models::order::Order;
use crate::models::product::Product;

/// Read-only view over the domain data fetched for one message
#[derive(Debug, Clone, Default)]
pub struct DomainLookups {
    /// Order fetched for an `order_id` entity, if any matched
    pub order: Option<Order>,

    /// Recent orders for the requesting customer (order-status queries
    /// without an order id)
    pub recent_orders: Vec<Order>,

    /// Products matching a `product_name`/`category` entity
    pub products: Vec<Product>,

    /// FAQ entry matched against the message text
    pub faq: Option<FaqEntry>,
}

/// Reply classification, surfaced so callers can tell "never asked" from
/// "asked, not found"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyClass {
    /// A required entity was missing; no lookup was attempted
    Clarification,
    /// The entity was present but the lookup returned nothing
    NotFound,
    /// The lookup succeeded (or the intent needs no lookup)
    Success,
}

/// Composed reply
#[derive(Debug, Clone)]
pub struct ComposedReply {
    /// Reply text shown to the user
    pub reply_text: String,

    /// Ordered, non-empty, intent-specific suggested actions
    pub suggested_actions: Vec<String>,

    /// Which reply class was produced
    pub class: ReplyClass,
}

impl ComposedReply {
    fn new(reply_text: impl Into<String>, actions: &[&str], class: ReplyClass) -> Self {
        Self {
            reply_text: reply_text.into(),
            suggested_actions: actions.iter().map(|a| a.to_string()).collect(),
            class,
        }
    }
}

/// 未识别意图的通用菜单，与会话开始时的顶层菜单一致
const GENERIC_MENU: &[&str] = &[
    "Check Order Status",
    "Product Information",
    "Return Request",
    "Contact Support",
    "General Help",
];

/// Response composer over fixed per-intent templates
pub struct ResponseComposer;

impl ResponseComposer {
    /// Create a composer
    pub fn new() -> Self {
        Self
    }

    /// Compose a reply for a classification result and its lookups
    pub fn compose(&self, result: &ClassificationResult, lookups: &DomainLookups) -> ComposedReply {
        match result.intent {
            Intent::OrderStatus => self.compose_order_status(result, lookups),
            Intent::ProductInfo => self.compose_product_info(result, lookups),
            Intent::ReturnRequest => self.compose_return_request(result, lookups),
            Intent::Faq => self.compose_faq(lookups),
            Intent::StoreHours => self.compose_store_hours(),
            Intent::Contact => self.compose_contact(),
            Intent::Greeting => self.compose_greeting(),
            Intent::Goodbye => self.compose_goodbye(),
            Intent::Unknown => self.compose_unknown(),
        }
    }

    fn compose_order_status(
        &self,
        result: &ClassificationResult,
        lookups: &DomainLookups,
    ) -> ComposedReply {
        let Some(order_id) = result.entity(EntityKind::OrderId) else {
            // 没有订单号时列出客户最近订单（若可用），否则请求补充
            if !lookups.recent_orders.is_empty() {
                let order_list = lookups
                    .recent_orders
                    .iter()
                    .take(3)
                    .map(|o| format!("• {} - {} ({})", o.order_id, o.product_name, o.status))
                    .collect::<Vec<_>>()
                    .join("\n");
                return ComposedReply::new(
                    format!(
                        "Here are your recent orders:\n{}\n\nPlease provide an order ID for \
                         detailed status.",
                        order_list
                    ),
                    &["Provide Order ID", "View All Orders"],
                    ReplyClass::Clarification,
                );
            }

            return ComposedReply::new(
                "To check your order status, please provide your order ID.",
                &["Provide Order ID", "Contact Support"],
                ReplyClass::Clarification,
            );
        };

        match &lookups.order {
            Some(order) => {
                let mut status_text =
                    format!("Your order {} is currently {}.", order.order_id, order.status);
                if let Some(return_status) = order.return_status {
                    status_text.push_str(&format!(" Return status: {}.", return_status));
                }
                ComposedReply::new(
                    status_text,
                    &["Track Another Order", "View Order Details", "Contact Support"],
                    ReplyClass::Success,
                )
            }
            None => ComposedReply::new(
                format!(
                    "I couldn't find order {}. Please check the order ID and try again.",
                    order_id
                ),
                &["Check Order ID", "Contact Support"],
                ReplyClass::NotFound,
            ),
        }
    }

    fn compose_product_info(
        &self,
        result: &ClassificationResult,
        lookups: &DomainLookups,
    ) -> ComposedReply {
        let query = result
            .entity(EntityKind::ProductName)
            .or_else(|| result.entity(EntityKind::Category));

        let Some(query) = query else {
            return ComposedReply::new(
                "I'd be happy to help you find product information. What product are you \
                 looking for?",
                &["Search Products", "Browse Categories", "View Featured Products"],
                ReplyClass::Clarification,
            );
        };

        if lookups.products.is_empty() {
            return ComposedReply::new(
                format!(
                    "I couldn't find any products matching '{}'. Please try a different \
                     search term.",
                    query
                ),
                &["Try Different Search", "Browse Categories", "Contact Support"],
                ReplyClass::NotFound,
            );
        }

        let product_list = lookups
            .products
            .iter()
            .map(|p| format!("• {} - ${:.2} ({})", p.name, p.price, p.category))
            .collect::<Vec<_>>()
            .join("\n");

        ComposedReply::new(
            format!("Here are products matching '{}':\n{}", query, product_list),
            &["View Product Details", "Search Another Product", "Browse Categories"],
            ReplyClass::Success,
        )
    }

    fn compose_return_request(
        &self,
        result: &ClassificationResult,
        lookups: &DomainLookups,
    ) -> ComposedReply {
        let Some(order_id) = result.entity(EntityKind::OrderId) else {
            return ComposedReply::new(
                "To process a return, please provide your order ID.",
                &["Provide Order ID", "View Return Policy", "Contact Support"],
                ReplyClass::Clarification,
            );
        };

        match &lookups.order {
            Some(order) if order.is_return_eligible() => ComposedReply::new(
                format!(
                    "Your order {} is eligible for return. Please provide a reason for the \
                     return.",
                    order.order_id
                ),
                &["Provide Return Reason", "View Return Policy", "Contact Support"],
                ReplyClass::Success,
            ),
            Some(order) => ComposedReply::new(
                format!(
                    "Your order {} is currently {}. Returns are only available for delivered \
                     orders.",
                    order.order_id, order.status
                ),
                &["Check Order Status", "Contact Support"],
                ReplyClass::Success,
            ),
            None => ComposedReply::new(
                format!(
                    "I couldn't find order {}. Please check the order ID and try again.",
                    order_id
                ),
                &["Check Order ID", "Contact Support"],
                ReplyClass::NotFound,
            ),
        }
    }

    fn compose_faq(&self, lookups: &DomainLookups) -> ComposedReply {
        match &lookups.faq {
            Some(entry) => ComposedReply::new(
                entry.answer.clone(),
                &["Ask Another Question", "Contact Support", "View Full FAQ"],
                ReplyClass::Success,
            ),
            None => ComposedReply::new(
                "I'd be happy to help! You can ask about our return policy, shipping, \
                 payment methods, or warranty information.",
                &[
                    "Return Policy",
                    "Shipping Info",
                    "Payment Methods",
                    "Warranty Info",
                    "Contact Support",
                ],
                ReplyClass::Clarification,
            ),
        }
    }

    fn compose_store_hours(&self) -> ComposedReply {
        ComposedReply::new(
            "Our store hours are:\n• Monday to Friday: 9 AM - 6 PM\n• Saturday: 10 AM - 4 PM\n\
             • Sunday: Closed\n\nWe're here to help during business hours!",
            &["Contact Us", "View Products", "Check Order Status"],
            ReplyClass::Success,
        )
    }

    fn compose_contact(&self) -> ComposedReply {
        ComposedReply::new(
            "You can contact us through:\n• Email: support@example.com\n\
             • Phone: 1-800-555-0199\n• Live Chat: Available during business hours",
            &["Email Support", "Call Us", "Live Chat"],
            ReplyClass::Success,
        )
    }

    fn compose_greeting(&self) -> ComposedReply {
        ComposedReply::new(
            "Hello! I'm your customer service assistant. How can I help you today?",
            &["Check Order Status", "Product Information", "Return Request", "General Help"],
            ReplyClass::Success,
        )
    }

    fn compose_goodbye(&self) -> ComposedReply {
        ComposedReply::new(
            "Thank you for contacting customer service! Have a great day!",
            &["Rate Service", "Contact Again", "Visit Website"],
            ReplyClass::Success,
        )
    }

    fn compose_unknown(&self) -> ComposedReply {
        ComposedReply::new(
            "I'm not sure I understand your request. Could you please rephrase your question \
             or choose from the options below?",
            GENERIC_MENU,
            ReplyClass::Clarification,
        )
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}
