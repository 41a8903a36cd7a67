use serde::{Deserialize, Serialize};

/// 天气记录缓存的默认名称
pub const WEATHER_CACHE_NAME: &str = "weather";

/// 缓存配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 协调层使用的缓存名称
    #[serde(default = "default_cache_name")]
    pub cache_name: String,
    /// 是否统计命中/未命中
    pub enable_stats: bool,
    /// 新建缓存时预分配的容量（条目数）
    pub initial_capacity: usize,
}

/// 默认缓存名称
fn default_cache_name() -> String {
    WEATHER_CACHE_NAME.to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_name: default_cache_name(),
            enable_stats: true,
            initial_capacity: 0,
        }
    }
}

impl CacheConfig {
    /// 创建缓存配置构建器
    pub fn builder() -> crate::config::CacheConfigBuilder {
        crate::config::CacheConfigBuilder::new()
    }
}
