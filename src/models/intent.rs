//! 意图数据模型
//!
//! 封闭的意图枚举，进程启动时固定，不可扩展。

use serde::{Deserialize, Serialize};

use crate::models::classification::EntityKind;

/// 意图枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// 订单状态查询
    OrderStatus,
    /// 商品信息查询
    ProductInfo,
    /// 退货请求
    ReturnRequest,
    /// 常见问题
    Faq,
    /// 营业时间
    StoreHours,
    /// 联系方式
    Contact,
    /// 问候
    Greeting,
    /// 告别
    Goodbye,
    /// 无法识别
    Unknown,
}

impl Intent {
    /// 所有意图，按目录顺序
    pub const ALL: [Intent; 9] = [
        Intent::OrderStatus,
        Intent::ProductInfo,
        Intent::ReturnRequest,
        Intent::Faq,
        Intent::StoreHours,
        Intent::Contact,
        Intent::Greeting,
        Intent::Goodbye,
        Intent::Unknown,
    ];

    /// 意图的稳定字符串名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::OrderStatus => "order_status",
            Intent::ProductInfo => "product_info",
            Intent::ReturnRequest => "return_request",
            Intent::Faq => "faq",
            Intent::StoreHours => "store_hours",
            Intent::Contact => "contact",
            Intent::Greeting => "greeting",
            Intent::Goodbye => "goodbye",
            Intent::Unknown => "unknown",
        }
    }

    /// 按名称解析意图，名称不在枚举内时返回 None
    pub fn parse(name: &str) -> Option<Intent> {
        Intent::ALL.iter().copied().find(|i| i.as_str() == name)
    }

    /// 该意图执行查询所必需的实体类型
    ///
    /// 缺失必需实体时 Composer 返回澄清回复而不是执行查询。
    pub fn required_entity(&self) -> Option<EntityKind> {
        match self {
            Intent::OrderStatus => Some(EntityKind::OrderId),
            Intent::ReturnRequest => Some(EntityKind::OrderId),
            Intent::ProductInfo => Some(EntityKind::ProductName),
            Intent::Faq
            | Intent::StoreHours
            | Intent::Contact
            | Intent::Greeting
            | Intent::Goodbye
            | Intent::Unknown => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_name_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::parse(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn test_parse_rejects_names_outside_enumeration() {
        assert_eq!(Intent::parse("order-status"), None);
        assert_eq!(Intent::parse("refund"), None);
        assert_eq!(Intent::parse(""), None);
    }

    #[test]
    fn test_required_entities() {
        assert_eq!(Intent::OrderStatus.required_entity(), Some(EntityKind::OrderId));
        assert_eq!(Intent::ReturnRequest.required_entity(), Some(EntityKind::OrderId));
        assert_eq!(
            Intent::ProductInfo.required_entity(),
            Some(EntityKind::ProductName)
        );
        assert_eq!(Intent::Greeting.required_entity(), None);
        assert_eq!(Intent::Unknown.required_entity(), None);
    }
}
