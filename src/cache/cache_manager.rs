//! 缓存管理器核心模块
//!
//! 按名称管理多个命名缓存。管理器是显式持有的对象，由调用方注入协调层，
//! 测试可以为每个用例创建互相隔离的实例。

use super::named_cache::NamedCache;
use super::stats::CacheStats;
use crate::error::WeatherResult;
use crate::types::CacheConfig;
use dashmap::DashMap;
use rat_logger::{debug, info};
use std::sync::Arc;

/// 缓存管理器
#[derive(Debug)]
pub struct CacheManager {
    /// 名称到缓存实例的映射
    caches: DashMap<String, Arc<NamedCache>>,
    /// 缓存配置
    config: CacheConfig,
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl CacheManager {
    /// 创建新的缓存管理器
    pub fn new(config: CacheConfig) -> Self {
        debug!("创建缓存管理器，配置: {:?}", config);
        Self {
            caches: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn build_cache(&self, name: &str) -> Arc<NamedCache> {
        Arc::new(NamedCache::with_capacity(
            name,
            self.config.initial_capacity,
            self.config.enable_stats,
        ))
    }

    /// 按名称查找缓存，不会创建
    pub fn get_cache(&self, name: &str) -> Option<Arc<NamedCache>> {
        self.caches.get(name).map(|entry| entry.value().clone())
    }

    /// 按名称获取缓存，不存在时创建
    pub fn get_or_create(&self, name: &str) -> Arc<NamedCache> {
        self.caches
            .entry(name.to_string())
            .or_insert_with(|| {
                info!("创建命名缓存: {}", name);
                self.build_cache(name)
            })
            .value()
            .clone()
    }

    /// 所有已注册的缓存名称
    pub fn cache_names(&self) -> Vec<String> {
        self.caches.iter().map(|entry| entry.key().clone()).collect()
    }

    /// 只读查看指定缓存的当前内容；缓存不存在时返回空列表
    pub fn list_cache_contents(&self, name: &str) -> WeatherResult<Vec<serde_json::Value>> {
        let Some(cache) = self.get_cache(name) else {
            debug!("查看缓存内容: 缓存 {} 不存在", name);
            return Ok(Vec::new());
        };

        let values = cache
            .values()
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(values)
    }

    /// 获取指定缓存的统计信息
    pub fn get_stats(&self, name: &str) -> Option<CacheStats> {
        self.get_cache(name).map(|cache| cache.stats())
    }

    /// 清空所有缓存的条目，缓存本身保留在注册表中
    pub fn clear_all(&self) {
        for entry in self.caches.iter() {
            entry.value().evict_all();
        }
        info!("已清空全部 {} 个命名缓存", self.caches.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecordKey, WeatherRecord};

    #[test]
    fn test_get_does_not_create() {
        let manager = CacheManager::default();
        assert!(manager.get_cache("weather").is_none());
        assert!(manager.cache_names().is_empty());
    }

    #[test]
    fn test_get_or_create_returns_same_instance() {
        let manager = CacheManager::default();
        let first = manager.get_or_create("weather");
        first.put(
            RecordKey::new("US", "Boston"),
            WeatherRecord::of("US", "Boston", "sunny"),
        );

        let second = manager.get_or_create("weather");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_list_cache_contents() {
        let manager = CacheManager::default();
        assert!(manager.list_cache_contents("missing").unwrap().is_empty());

        manager.get_or_create("weather").put(
            RecordKey::new("FR", "Nice"),
            WeatherRecord::of("FR", "Nice", "windy"),
        );
        let contents = manager.list_cache_contents("weather").unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["city"], "Nice");
        assert_eq!(contents[0]["weather_details"], "windy");
    }

    #[test]
    fn test_clear_all_keeps_registration() {
        let manager = CacheManager::default();
        manager.get_or_create("weather").put(
            RecordKey::new("US", "Boston"),
            WeatherRecord::of("US", "Boston", "sunny"),
        );
        manager.get_or_create("archive");

        manager.clear_all();
        assert_eq!(manager.cache_names().len(), 2);
        assert!(manager.get_cache("weather").unwrap().is_empty());
        assert_eq!(manager.get_stats("weather").unwrap().evictions, 1);
    }
}
