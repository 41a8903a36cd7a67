//! # 全局配置构建器模块
//!
//! 提供全局配置的构建器实现，支持链式调用和严格验证

use crate::config::core::{GlobalConfig, LoggingConfig};
use crate::error::WeatherCacheError;
use crate::types::*;
use rat_logger::info;

/// 全局配置构建器
///
/// 提供链式配置接口，支持流畅的API调用
#[derive(Debug)]
pub struct GlobalConfigBuilder {
    store: Option<StoreConfig>,
    cache: Option<CacheConfig>,
    logging: Option<LoggingConfig>,
}
impl GlobalConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            store: None,
            cache: None,
            logging: None,
        }
    }

    /// 设置存储后端配置
    ///
    /// # 参数
    ///
    /// * `store` - 存储后端配置
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.store = Some(store);
        self
    }

    /// 设置缓存配置
    ///
    /// # 参数
    ///
    /// * `cache` - 缓存配置
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    /// 设置日志配置
    ///
    /// # 参数
    ///
    /// * `logging` - 日志配置
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// 构建全局配置
    ///
    /// # 错误
    ///
    /// 如果任何必需的配置项未设置，将返回错误
    pub fn build(self) -> Result<GlobalConfig, WeatherCacheError> {
        let store = self.store.ok_or_else(|| {
            crate::weather_error!(config, "存储后端配置必须设置")
        })?;

        let cache = self.cache.ok_or_else(|| {
            crate::weather_error!(config, "缓存配置必须设置")
        })?;

        let logging = self.logging.ok_or_else(|| {
            crate::weather_error!(config, "日志配置必须设置")
        })?;

        info!("创建全局配置: 存储后端={:?}, 缓存名称={}", store.store_type(), cache.cache_name);

        Ok(GlobalConfig {
            store,
            cache,
            logging,
        })
    }
}
impl Default for GlobalConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::LogLevel;

    #[test]
    fn test_builders_require_every_field() {
        assert!(GlobalConfig::builder().build().is_err());
        assert!(CacheConfig::builder().cache_name("weather").build().is_err());
        assert!(LoggingConfig::builder().level(LogLevel::Info).build().is_err());
    }

    #[test]
    fn test_empty_cache_name_rejected() {
        let result = CacheConfig::builder()
            .cache_name("  ")
            .enable_stats(true)
            .initial_capacity(16)
            .build();
        assert!(matches!(result, Err(WeatherCacheError::ConfigError { .. })));
    }

    #[test]
    fn test_full_build() {
        let config = GlobalConfig::builder()
            .store(StoreConfig::Memory)
            .cache(
                CacheConfig::builder()
                    .cache_name("weather")
                    .enable_stats(true)
                    .initial_capacity(128)
                    .build()
                    .unwrap(),
            )
            .logging(
                LoggingConfig::builder()
                    .level(LogLevel::Warn)
                    .console(false)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.cache.initial_capacity, 128);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }
}
