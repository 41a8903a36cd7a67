//! 天气记录服务实现

use super::traits::WeatherOperations;
use crate::cache::{CacheManager, NamedCache};
use crate::error::WeatherResult;
use crate::store::WeatherStore;
use crate::types::{RecordKey, WeatherRecord};
use crate::weather_error;
use async_trait::async_trait;
use rat_logger::{debug, error, info};
use std::sync::Arc;

/// 天气记录服务
///
/// 所有记录操作都经过这里，由它决定何时读写缓存、何时访问存储。
/// 存储与缓存的更新不在同一个事务内，两步之间失败会让两者暂时不一致，
/// 直到下一次整体预热或单条回源。
pub struct WeatherService {
    store: Arc<dyn WeatherStore>,
    cache_manager: Arc<CacheManager>,
    cache_name: String,
}

impl WeatherService {
    /// 创建服务，缓存名称取自缓存管理器的配置
    pub fn new(store: Arc<dyn WeatherStore>, cache_manager: Arc<CacheManager>) -> Self {
        let cache_name = cache_manager.config().cache_name.clone();
        info!("创建天气记录服务，缓存名称: {}", cache_name);
        Self {
            store,
            cache_manager,
            cache_name,
        }
    }

    pub fn cache_manager(&self) -> &Arc<CacheManager> {
        &self.cache_manager
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn cache(&self) -> Option<Arc<NamedCache>> {
        self.cache_manager.get_cache(&self.cache_name)
    }

    /// 首次写入时才创建缓存
    fn cache_for_write(&self) -> Arc<NamedCache> {
        self.cache_manager.get_or_create(&self.cache_name)
    }
}

#[async_trait]
impl WeatherOperations for WeatherService {
    async fn get_all(&self) -> WeatherResult<Vec<WeatherRecord>> {
        let cache = self.cache();
        if let Some(cache) = &cache {
            if !cache.is_empty() {
                debug!("列表查询命中缓存: cache={}, 条目数={}", self.cache_name, cache.len());
                return Ok(cache.values());
            }
        }

        // 缓存不存在或为空：整体回源并预热。
        // 存储本身为空时每次都会走到这里。
        let generation = cache.map_or(0, |cache| cache.generation());
        let records = self.store.find_all().await?;
        let cache = self.cache_for_write();
        for record in &records {
            cache.fill(record.id.clone(), record.clone(), generation);
        }
        debug!("列表查询回源并预热缓存: cache={}, 记录数={}", self.cache_name, records.len());
        Ok(records)
    }

    async fn get_by_city(&self, country: &str, city: &str) -> WeatherResult<Option<WeatherRecord>> {
        let key = RecordKey::new(country, city);

        let cache = self.cache();
        if let Some(cached) = cache.as_ref().and_then(|cache| cache.get(&key)) {
            debug!("缓存命中: key={}", key);
            return Ok(Some(cached));
        }
        debug!("缓存未命中: key={}", key);

        let generation = cache.map_or(0, |cache| cache.generation());
        match self.store.find_by_id(&key).await? {
            Some(record) => {
                // 并发写入可能已放入更新的值，以缓存中已有的为准；
                // 回源期间发生过驱逐则只返回读到的记录
                let cached = self
                    .cache_for_write()
                    .fill(key, record.clone(), generation)
                    .unwrap_or(record);
                Ok(Some(cached))
            }
            None => {
                debug!("记录不存在: key={}", key);
                Ok(None)
            }
        }
    }

    async fn save(&self, record: WeatherRecord) -> WeatherResult<WeatherRecord> {
        if self.store.exists_by_id(&record.id).await? {
            error!("天气记录已存在，城市: {}", record.id.city);
            return Err(weather_error!(already_exists, record.id));
        }

        let saved = self.store.save(&record).await?;
        self.cache_for_write().put(saved.id.clone(), saved.clone());
        info!("已创建天气记录: {}", saved.id);
        Ok(saved)
    }

    async fn update(&self, details: &str, country: &str, city: &str) -> WeatherResult<WeatherRecord> {
        let key = RecordKey::new(country, city);
        if !self.store.exists_by_id(&key).await? {
            error!("更新失败: 城市 {} 的天气记录不存在", city);
            return Err(weather_error!(not_found, key));
        }

        let saved = self.store.save(&WeatherRecord::new(key, details)).await?;
        self.cache_for_write().put(saved.id.clone(), saved.clone());
        info!("已更新天气记录: {}", saved.id);
        Ok(saved)
    }

    async fn delete(&self, country: &str, city: &str) -> WeatherResult<()> {
        let key = RecordKey::new(country, city);
        match self.store.find_by_id(&key).await? {
            Some(record) => {
                self.store.delete(&record).await?;
                info!("已删除天气记录: {}", key);
            }
            None => {
                error!("删除失败: 未找到天气记录 {}", key);
            }
        }

        // 缓存尚未创建时也要登记这次驱逐，挡住进行中的回源回填
        self.cache_for_write().evict(&key);
        Ok(())
    }

    async fn delete_all(&self) -> WeatherResult<()> {
        self.store.delete_all().await?;
        self.cache_for_write().evict_all();
        info!("已删除全部天气记录并清空缓存: {}", self.cache_name);
        Ok(())
    }
}
