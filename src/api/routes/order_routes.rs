//! Order Routes
//!
//! 定义订单相关的 API 路由。

use crate::api::handlers::order_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建订单路由器
pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/:order_id", get(get_order))
}
