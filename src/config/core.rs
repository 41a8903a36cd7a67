//! # 配置管理模块 - 核心配置类型
//!
//! 提供统一的配置管理系统，支持构建器模式和链式配置
//! 严格遵循项目规范：所有配置项必须显式设置，严禁使用默认值

use crate::error::WeatherCacheError;
use crate::types::*;
use serde::{Deserialize, Serialize};
use rat_logger::info;

/// 全局配置
///
/// 包括存储后端、缓存与日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// 存储后端配置
    pub store: StoreConfig,
    /// 缓存配置
    pub cache: CacheConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,
    /// 是否输出到控制台
    pub console: bool,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 错误级别
    Error,
    /// 警告级别
    Warn,
    /// 信息级别
    Info,
    /// 调试级别
    Debug,
    /// 跟踪级别
    Trace,
}

fn is_toml<P: AsRef<std::path::Path>>(path: P) -> bool {
    path.as_ref().extension().and_then(|s| s.to_str()) == Some("toml")
}

impl GlobalConfig {
    /// 创建全局配置构建器
    pub fn builder() -> super::builders::GlobalConfigBuilder {
        super::builders::GlobalConfigBuilder::new()
    }

    /// 从配置文件加载配置，扩展名为 toml 时按 TOML 解析，否则按 JSON
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn from_file<P: AsRef<std::path::Path>>(config_path: P) -> Result<Self, WeatherCacheError> {
        let content = std::fs::read_to_string(config_path.as_ref())?;

        let config: GlobalConfig = if is_toml(&config_path) {
            toml::from_str(&content)
                .map_err(|e| crate::weather_error!(config, format!("解析TOML配置文件失败: {}", e)))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| crate::weather_error!(config, format!("解析JSON配置文件失败: {}", e)))?
        };

        if config.cache.cache_name.is_empty() {
            return Err(crate::weather_error!(config, "缓存名称不能为空"));
        }

        info!("从文件加载配置: {:?}", config_path.as_ref());
        Ok(config)
    }

    /// 保存配置到文件
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, config_path: P) -> Result<(), WeatherCacheError> {
        let content = if is_toml(&config_path) {
            toml::to_string_pretty(self)
                .map_err(|e| crate::weather_error!(config, format!("序列化TOML配置失败: {}", e)))?
        } else {
            serde_json::to_string_pretty(self)
                .map_err(|e| crate::weather_error!(config, format!("序列化JSON配置失败: {}", e)))?
        };

        std::fs::write(config_path.as_ref(), content)?;

        info!("保存配置到文件: {:?}", config_path.as_ref());
        Ok(())
    }
}

impl LoggingConfig {
    /// 创建日志配置构建器
    pub fn builder() -> super::builders::LoggingConfigBuilder {
        super::builders::LoggingConfigBuilder::new()
    }
}
