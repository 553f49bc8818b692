//! Product Routes
//!
//! 定义商品相关的 API 路由。

use crate::api::handlers::product_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建商品路由器
pub fn create_product_router() -> Router<AppState> {
    Router::new().route("/products", get(list_products))
}
