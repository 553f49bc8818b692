//! 订单数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 订单状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 待处理
    #[serde(rename = "Pending")]
    Pending,

    /// 处理中
    #[serde(rename = "Processing")]
    Processing,

    /// 已发货
    #[serde(rename = "Shipped")]
    Shipped,

    /// 运输中
    #[serde(rename = "In Transit")]
    InTransit,

    /// 已送达
    #[serde(rename = "Delivered")]
    Delivered,

    /// 已取消
    #[serde(rename = "Cancelled")]
    Cancelled,

    /// 已退货
    #[serde(rename = "Returned")]
    Returned,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Processing => write!(f, "Processing"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::InTransit => write!(f, "In Transit"),
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
            OrderStatus::Returned => write!(f, "Returned"),
        }
    }
}

/// 退货状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
    /// 已提交
    #[serde(rename = "Requested")]
    Requested,

    /// 待审批
    #[serde(rename = "Pending Approval")]
    PendingApproval,

    /// 已批准
    #[serde(rename = "Approved")]
    Approved,

    /// 已拒绝
    #[serde(rename = "Rejected")]
    Rejected,
}

impl std::fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnStatus::Requested => write!(f, "Requested"),
            ReturnStatus::PendingApproval => write!(f, "Pending Approval"),
            ReturnStatus::Approved => write!(f, "Approved"),
            ReturnStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// 订单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 订单编号
    pub order_id: String,

    /// 客户编号
    pub customer_id: String,

    /// 商品名称
    pub product_name: String,

    /// 下单时间
    pub order_date: DateTime<Utc>,

    /// 数量
    pub quantity: u32,

    /// 订单金额
    pub order_amount: f64,

    /// 订单状态
    pub status: OrderStatus,

    /// 退货状态
    pub return_status: Option<ReturnStatus>,

    /// 退货原因
    pub return_reason: Option<String>,

    /// 备注
    pub notes: Option<String>,
}

impl Order {
    /// 是否满足退货条件（仅已送达订单可退货）
    pub fn is_return_eligible(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

/// 退货回执
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnReceipt {
    /// 退货单编号（拒绝时为空）
    pub return_id: String,

    /// 退货状态
    pub status: ReturnStatus,

    /// 说明消息
    pub message: String,

    /// 预估退款金额
    pub estimated_refund: Option<f64>,
}
