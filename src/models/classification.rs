//! 分类结果数据模型
//!
//! 每次请求创建，不做持久化。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::intent::Intent;

/// 实体类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// 订单编号
    OrderId,
    /// 商品名称或关键词
    ProductName,
    /// 商品类目
    Category,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::OrderId => write!(f, "order_id"),
            EntityKind::ProductName => write!(f, "product_name"),
            EntityKind::Category => write!(f, "category"),
        }
    }
}

/// 分类来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// 规则匹配
    Pattern,
    /// 外部模型
    FallbackModel,
}

/// 分类结果
///
/// 恒有且仅有一个意图，置信度在 [0,1] 区间内；`Unknown` 意图的置信度
/// 始终低于接受阈值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// 识别出的意图
    pub intent: Intent,
    /// 置信度 (0.0 到 1.0)
    pub confidence: f32,
    /// 分类来源
    pub source: ClassificationSource,
    /// 提取的实体映射
    pub entities: HashMap<EntityKind, String>,
}

impl ClassificationResult {
    /// 创建规则匹配结果
    pub fn from_pattern(intent: Intent, confidence: f32) -> Self {
        Self {
            intent,
            confidence: confidence.clamp(0.0, 1.0),
            source: ClassificationSource::Pattern,
            entities: HashMap::new(),
        }
    }

    /// 创建外部模型结果
    pub fn from_fallback(intent: Intent, confidence: f32) -> Self {
        Self {
            intent,
            confidence: confidence.clamp(0.0, 1.0),
            source: ClassificationSource::FallbackModel,
            entities: HashMap::new(),
        }
    }

    /// 外部分类失败时的退化结果
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            confidence: 0.0,
            source: ClassificationSource::FallbackModel,
            entities: HashMap::new(),
        }
    }

    /// 合并实体映射（与产生意图的分支无关）
    pub fn with_entities(mut self, entities: HashMap<EntityKind, String>) -> Self {
        self.entities = entities;
        self
    }

    /// 获取指定类型的实体值
    pub fn entity(&self, kind: EntityKind) -> Option<&str> {
        self.entities.get(&kind).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let high = ClassificationResult::from_fallback(Intent::Faq, 1.7);
        assert_eq!(high.confidence, 1.0);

        let low = ClassificationResult::from_fallback(Intent::Faq, -0.3);
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn test_unknown_degradation() {
        let result = ClassificationResult::unknown();
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.source, ClassificationSource::FallbackModel);
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_entity_access() {
        let mut entities = HashMap::new();
        entities.insert(EntityKind::OrderId, "52768".to_string());

        let result = ClassificationResult::from_pattern(Intent::OrderStatus, 0.9)
            .with_entities(entities);

        assert_eq!(result.entity(EntityKind::OrderId), Some("52768"));
        assert_eq!(result.entity(EntityKind::ProductName), None);
    }
}
