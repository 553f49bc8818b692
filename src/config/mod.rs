//! 配置模块

pub mod config;
pub mod loader;

pub use config::{
    AppConfig, ClassifierConfig, DataConfig, FallbackConfig, LoggingConfig, ServerConfig,
};
pub use loader::{ConfigLoader, ConfigValidationError};
