//! # 缓存配置构建器模块

use crate::error::WeatherCacheError;
use crate::types::CacheConfig;
use rat_logger::info;

/// 缓存配置构建器
#[derive(Debug)]
pub struct CacheConfigBuilder {
    cache_name: Option<String>,
    enable_stats: Option<bool>,
    initial_capacity: Option<usize>,
}
impl CacheConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            cache_name: None,
            enable_stats: None,
            initial_capacity: None,
        }
    }

    /// 设置缓存名称
    pub fn cache_name<S: Into<String>>(mut self, cache_name: S) -> Self {
        self.cache_name = Some(cache_name.into());
        self
    }

    /// 设置是否统计命中率
    pub fn enable_stats(mut self, enable_stats: bool) -> Self {
        self.enable_stats = Some(enable_stats);
        self
    }

    /// 设置预分配容量
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = Some(initial_capacity);
        self
    }

    /// 构建缓存配置
    ///
    /// # 错误
    ///
    /// 任何配置项未设置或缓存名称为空时返回错误
    pub fn build(self) -> Result<CacheConfig, WeatherCacheError> {
        let cache_name = self.cache_name.ok_or_else(|| {
            crate::weather_error!(config, "缓存名称必须设置")
        })?;

        if cache_name.trim().is_empty() {
            return Err(crate::weather_error!(config, "缓存名称不能为空"));
        }

        let enable_stats = self.enable_stats.ok_or_else(|| {
            crate::weather_error!(config, "统计选项必须设置")
        })?;

        let initial_capacity = self.initial_capacity.ok_or_else(|| {
            crate::weather_error!(config, "预分配容量必须设置")
        })?;

        info!(
            "创建缓存配置: 名称={}, 统计={}, 预分配容量={}",
            cache_name, enable_stats, initial_capacity
        );

        Ok(CacheConfig {
            cache_name,
            enable_stats,
            initial_capacity,
        })
    }
}
impl Default for CacheConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
