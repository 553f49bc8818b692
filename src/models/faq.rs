//! FAQ 数据模型

use serde::{Deserialize, Serialize};

/// FAQ 条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    /// 问题
    pub question: String,

    /// 答案
    pub answer: String,

    /// 分类
    pub category: String,

    /// 关键词标签
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FaqEntry {
    /// 任一标签出现在文本中即视为命中
    pub fn matches(&self, text: &str) -> bool {
        self.tags.iter().any(|tag| text.contains(tag.as_str()))
    }
}
