//! Return Routes
//!
//! 定义退货相关的 API 路由。

use crate::api::handlers::return_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建退货路由器
pub fn create_return_router() -> Router<AppState> {
    Router::new().route("/returns", post(post_return))
}
