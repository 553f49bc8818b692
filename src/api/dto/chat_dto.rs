//! 聊天 DTO
//!
//! 定义聊天相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 聊天请求
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// 用户消息文本
    pub message: String,
    /// 客户 ID（可选）
    pub customer_id: Option<String>,
    /// 会话 ID（可选，缺省时服务端生成）
    pub session_id: Option<String>,
}

/// 聊天响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 回复文本
    pub reply: String,
    /// 识别的意图
    pub intent: String,
    /// 置信度
    pub confidence: f32,
    /// 建议操作
    pub suggested_actions: Vec<String>,
}

/// 会话历史中的一轮
#[derive(Debug, Serialize)]
pub struct HistoryTurnResponse {
    /// 用户文本
    pub user_text: String,
    /// 回复文本
    pub reply_text: String,
    /// 识别的意图
    pub intent: String,
    /// 置信度
    pub confidence: f32,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
}

/// 会话历史响应
#[derive(Debug, Serialize)]
pub struct SessionHistoryResponse {
    /// 会话 ID
    pub session_id: String,
    /// 历史轮次
    pub turns: Vec<HistoryTurnResponse>,
    /// 总数
    pub total: usize,
}
