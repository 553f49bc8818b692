//! 核心数据模型模块
//!
//! 定义 Helpdesk 的核心数据结构：Intent, ClassificationResult, PatternRule
//! 以及领域数据模型：Order, Product, FaqEntry, ConversationTurn

pub mod classification;
pub mod conversation;
pub mod faq;
pub mod intent;
pub mod order;
pub mod product;
pub mod rule;

pub use classification::*;
pub use conversation::*;
pub use faq::*;
pub use intent::*;
pub use order::*;
pub use product::*;
pub use rule::*;
