//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod analytics_handler;
pub mod chat_handler;
pub mod order_handler;
pub mod product_handler;
pub mod return_handler;

pub use analytics_handler::*;
pub use chat_handler::*;
pub use order_handler::*;
pub use product_handler::*;
pub use return_handler::*;
