//! 规则目录数据模型
//!
//! 静态配置，进程启动时构建一次，运行期间只读。

use serde::{Deserialize, Serialize};

use crate::models::intent::Intent;

/// 匹配规则
///
/// 任一模式出现在归一化文本中即视为命中，命中记录 `base_confidence`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    /// 规则对应的意图
    pub intent: Intent,
    /// 匹配模式列表（子串或词组）
    pub patterns: Vec<String>,
    /// 固定的基础置信度
    pub base_confidence: f32,
}

impl PatternRule {
    /// 创建规则
    pub fn new(intent: Intent, patterns: &[&str], base_confidence: f32) -> Self {
        Self {
            intent,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            base_confidence: base_confidence.clamp(0.0, 1.0),
        }
    }
}

/// 规则目录
///
/// 规则按优先级排列：具体意图在前，greeting/goodbye 最后检查，
/// 避免短模式遮蔽更长的查询。
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<PatternRule>,
}

impl RuleCatalog {
    /// 从给定规则构建目录，保持注册顺序
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// 按优先级顺序迭代规则
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PatternRule)> {
        self.rules.iter().enumerate()
    }

    /// 规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 内置规则目录
    pub fn builtin() -> Self {
        Self::new(vec![
            PatternRule::new(
                Intent::OrderStatus,
                &[
                    "order status",
                    "track order",
                    "where is my order",
                    "order tracking",
                    "delivery status",
                    "shipping status",
                ],
                0.9,
            ),
            PatternRule::new(
                Intent::ReturnRequest,
                &[
                    "return",
                    "refund",
                    "exchange",
                    "send back",
                    "return policy",
                    "return item",
                ],
                0.85,
            ),
            PatternRule::new(
                Intent::ProductInfo,
                &[
                    "product information",
                    "tell me about",
                    "what is",
                    "product details",
                    "specifications",
                    "price",
                ],
                0.8,
            ),
            PatternRule::new(
                Intent::StoreHours,
                &[
                    "store hours",
                    "opening hours",
                    "when are you open",
                    "business hours",
                    "store time",
                ],
                0.85,
            ),
            PatternRule::new(
                Intent::Contact,
                &[
                    "contact",
                    "phone number",
                    "email",
                    "address",
                    "customer service",
                ],
                0.8,
            ),
            PatternRule::new(
                Intent::Faq,
                &["help", "question", "how to", "what if", "can you help", "support"],
                0.75,
            ),
            PatternRule::new(
                Intent::Greeting,
                &[
                    "hello",
                    "hi",
                    "hey",
                    "good morning",
                    "good afternoon",
                    "good evening",
                    "greetings",
                ],
                0.7,
            ),
            PatternRule::new(
                Intent::Goodbye,
                &[
                    "bye",
                    "goodbye",
                    "see you",
                    "thanks",
                    "thank you",
                    "farewell",
                    "have a good day",
                ],
                0.7,
            ),
        ])
    }
}
