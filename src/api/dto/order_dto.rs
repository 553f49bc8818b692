//! 订单 DTO
//!
//! 定义订单相关的响应数据结构。

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::order::Order;

/// 订单响应
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    /// 订单编号
    pub order_id: String,
    /// 客户编号
    pub customer_id: String,
    /// 商品名称
    pub product_name: String,
    /// 下单时间
    pub order_date: DateTime<Utc>,
    /// 数量
    pub quantity: u32,
    /// 订单金额
    pub order_amount: f64,
    /// 订单状态
    pub status: String,
    /// 退货状态
    pub return_status: Option<String>,
    /// 是否可退货
    pub return_eligible: bool,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            return_eligible: order.is_return_eligible(),
            order_id: order.order_id,
            customer_id: order.customer_id,
            product_name: order.product_name,
            order_date: order.order_date,
            quantity: order.quantity,
            order_amount: order.order_amount,
            status: order.status.to_string(),
            return_status: order.return_status.map(|s| s.to_string()),
        }
    }
}

/// 订单列表响应
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    /// 订单列表
    pub orders: Vec<OrderResponse>,
    /// 总数
    pub total: usize,
}
