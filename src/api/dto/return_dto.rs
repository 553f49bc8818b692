//! 退货 DTO
//!
//! 定义退货相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::order::ReturnReceipt;

/// 退货请求
#[derive(Debug, Deserialize)]
pub struct ReturnRequestBody {
    /// 订单编号
    pub order_id: String,
    /// 退货原因
    pub reason: String,
}

/// 退货响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ReturnResponse {
    /// 退货单编号（拒绝时为空）
    pub return_id: String,
    /// 退货状态
    pub status: String,
    /// 说明消息
    pub message: String,
    /// 预估退款金额
    pub estimated_refund: Option<f64>,
}

impl From<ReturnReceipt> for ReturnResponse {
    fn from(receipt: ReturnReceipt) -> Self {
        Self {
            return_id: receipt.return_id,
            status: receipt.status.to_string(),
            message: receipt.message,
            estimated_refund: receipt.estimated_refund,
        }
    }
}
