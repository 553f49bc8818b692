//! 会话轮次数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::classification::ClassificationResult;

/// 单轮会话记录
///
/// 由请求处理方拥有，可选地追加到会话级日志。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// 会话 ID
    pub session_id: String,

    /// 客户 ID
    pub customer_id: Option<String>,

    /// 用户原始文本
    pub user_text: String,

    /// 分类结果
    pub classification: ClassificationResult,

    /// 回复文本
    pub reply_text: String,

    /// 建议操作（有序）
    pub suggested_actions: Vec<String>,

    /// 时间戳
    pub timestamp: DateTime<Utc>,
}

/// 聊天回复
///
/// `handle_message` 的返回值，Web 层原样序列化给客户端。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// 回复文本
    pub reply: String,

    /// 识别的意图
    pub intent: String,

    /// 置信度
    pub confidence: f32,

    /// 建议操作
    pub suggested_actions: Vec<String>,
}
