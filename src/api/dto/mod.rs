//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod chat_dto;
pub mod order_dto;
pub mod product_dto;
pub mod return_dto;

pub use chat_dto::*;
pub use order_dto::*;
pub use product_dto::*;
pub use return_dto::*;
