//! Routes 模块
//!
//! 定义 API 路由。

pub mod analytics_routes;
pub mod chat_routes;
pub mod order_routes;
pub mod product_routes;
pub mod return_routes;
