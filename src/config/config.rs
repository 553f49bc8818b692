use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
    /// 最大请求体大小（字节）
    pub max_request_size: usize,
}

/// 意图分类器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// 规则匹配的接受阈值，低于该值触发外部分类
    pub acceptance_threshold: f32,
}

/// 外部分类服务配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FallbackConfig {
    /// 是否启用外部分类
    pub enabled: bool,
    /// OpenAI 兼容接口地址
    pub base_url: String,
    /// API 密钥（为空时退化为本地 unknown）
    pub api_key: String,
    /// 模型名称
    pub model: String,
    /// 单次调用超时（秒）
    pub timeout: u64,
}

/// 领域数据配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// 商品数据文件（JSON）
    pub products_file: Option<PathBuf>,
    /// 订单数据文件（JSON）
    pub orders_file: Option<PathBuf>,
    /// FAQ 数据文件（JSON）
    pub faq_file: Option<PathBuf>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 意图分类器配置
    pub classifier: ClassifierConfig,
    /// 外部分类服务配置
    pub fallback: FallbackConfig,
    /// 领域数据配置
    pub data: DataConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
                request_timeout: 30,
                max_request_size: 1024 * 1024,
            },
            classifier: ClassifierConfig {
                acceptance_threshold: 0.6,
            },
            fallback: FallbackConfig {
                enabled: false,
                base_url: "https://api.openai.com/v1".into(),
                api_key: String::new(),
                model: "gpt-3.5-turbo".into(),
                timeout: 5,
            },
            data: DataConfig {
                products_file: Some(PathBuf::from("./data/products.json")),
                orders_file: Some(PathBuf::from("./data/orders.json")),
                faq_file: Some(PathBuf::from("./data/faq.json")),
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: true,
            },
            app_name: "helpdesk".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.fallback.enabled = true;
        config
    }
}
