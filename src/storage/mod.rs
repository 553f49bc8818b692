//! 存储模块
//!
//! 领域数据的只读访问接口与内存实现。核心只消费按键查询的签名，
//! 真正的数据源属于外部协作方。

pub mod memory;
pub mod repository;

pub use memory::{InMemoryConversationLog, InMemoryFaqStore, InMemoryOrderStore, InMemoryProductStore};
pub use repository::{ConversationLog, FaqStore, OrderStore, ProductQuery, ProductStore};
