//! 可观测性模块
//!
//! 提供分析事件采集、Prometheus 指标、结构化日志和健康检查。

use axum::{Json, Router, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::classification::ClassificationSource;
use crate::models::intent::Intent;

// ===== Analytics Sink =====

/// 单次消息处理产生的分析事件
#[derive(Debug, Clone)]
pub struct AnalyticsEvent {
    pub intent: Intent,
    pub confidence: f32,
    pub source: ClassificationSource,
    pub duration_ms: u64,
}

/// Analytics collection seam
///
/// The agent reports one event per handled message through this trait
/// instead of mutating global counters, so tests can inject their own sink
/// and multiple agent instances never share hidden state.
pub trait AnalyticsSink: Send + Sync {
    /// Record one handled message
    fn record_turn(&self, event: &AnalyticsEvent);

    /// Record a pipeline error
    fn record_error(&self);

    /// Current aggregate view
    fn snapshot(&self) -> AnalyticsSnapshot;
}

/// 聚合后的分析视图
#[derive(Debug, Clone, Serialize, Default)]
pub struct AnalyticsSnapshot {
    /// 处理的消息总数
    pub messages_total: u64,

    /// 走外部模型退化分支的次数
    pub fallback_total: u64,

    /// 错误总数
    pub errors_total: u64,

    /// 各意图的命中次数
    pub intent_counts: BTreeMap<String, u64>,

    /// 平均处理耗时（毫秒）
    pub avg_duration_ms: f64,
}

/// Atomic-counter sink backing the metrics endpoint
#[derive(Default)]
pub struct MetricsSink {
    messages_total: AtomicU64,
    fallback_total: AtomicU64,
    errors_total: AtomicU64,
    duration_sum_ms: AtomicU64,
    intent_counts: DashMap<String, u64>,
}

impl MetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        let messages = self.messages_total.load(Ordering::SeqCst);
        let mut output = format!(
            r#"# HELP chat_messages_total Total chat messages handled
# TYPE chat_messages_total counter
chat_messages_total {}
# HELP chat_fallback_total Messages classified by the external fallback model
# TYPE chat_fallback_total counter
chat_fallback_total {}
# HELP chat_errors_total Total pipeline errors
# TYPE chat_errors_total counter
chat_errors_total {}
# HELP chat_duration_seconds Message handling duration in seconds
# TYPE chat_duration_seconds histogram
chat_duration_seconds_sum {}
chat_duration_seconds_count {}
"#,
            messages,
            self.fallback_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
            self.duration_sum_ms.load(Ordering::SeqCst) as f64 / 1000.0,
            messages,
        );

        output.push_str("# HELP chat_intent_total Messages per classified intent\n");
        output.push_str("# TYPE chat_intent_total counter\n");
        let mut counts: Vec<(String, u64)> = self
            .intent_counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        counts.sort();
        for (intent, count) in counts {
            output.push_str(&format!(
                "chat_intent_total{{intent=\"{}\"}} {}\n",
                intent, count
            ));
        }

        output
    }
}

impl AnalyticsSink for MetricsSink {
    fn record_turn(&self, event: &AnalyticsEvent) {
        self.messages_total.fetch_add(1, Ordering::SeqCst);
        self.duration_sum_ms
            .fetch_add(event.duration_ms, Ordering::SeqCst);
        if event.source == ClassificationSource::FallbackModel {
            self.fallback_total.fetch_add(1, Ordering::SeqCst);
        }
        *self
            .intent_counts
            .entry(event.intent.as_str().to_string())
            .or_insert(0) += 1;
    }

    fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    fn snapshot(&self) -> AnalyticsSnapshot {
        let messages = self.messages_total.load(Ordering::SeqCst);
        let duration_sum = self.duration_sum_ms.load(Ordering::SeqCst);

        AnalyticsSnapshot {
            messages_total: messages,
            fallback_total: self.fallback_total.load(Ordering::SeqCst),
            errors_total: self.errors_total.load(Ordering::SeqCst),
            intent_counts: self
                .intent_counts
                .iter()
                .map(|entry| (entry.key().clone(), *entry.value()))
                .collect(),
            avg_duration_ms: if messages == 0 {
                0.0
            } else {
                duration_sum as f64 / messages as f64
            },
        }
    }
}

/// Sink that discards everything, for tests and tooling
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record_turn(&self, _event: &AnalyticsEvent) {}

    fn record_error(&self) {}

    fn snapshot(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot::default()
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
}

/// 应用状态（用于健康检查与指标端点）
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<MetricsSink>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: Arc<MetricsSink>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
pub async fn health_check(
    state: axum::extract::State<Arc<ObservabilityState>>,
) -> impl IntoResponse {
    let health_status = HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
    };

    (axum::http::StatusCode::OK, Json(health_status))
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// 就绪检查
pub async fn readiness() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "Ready")
}

/// Prometheus 指标端点
pub async fn metrics(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let output = state.metrics.gather();
    (axum::http::StatusCode::OK, output)
}

/// 版本信息端点
pub async fn version(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化结构化日志
pub fn init_tracing(service_name: &str) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| format!("info,{}", service_name));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
