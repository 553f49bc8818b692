//! Helpdesk - 客服聊天助手服务
//!
//! 将用户的自由文本消息解析为意图、置信度与实体，结合订单/商品/FAQ
//! 数据生成模板化回复和后续操作建议。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
