//! Analytics Routes
//!
//! 定义分析相关的 API 路由。

use crate::api::handlers::analytics_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建分析路由器
pub fn create_analytics_router() -> Router<AppState> {
    Router::new().route("/analytics", get(get_analytics))
}
