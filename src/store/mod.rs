//! 存储适配器模块
//!
//! 提供统一的天气记录存储接口，屏蔽不同存储后端的实现差异

use crate::error::WeatherResult;
use crate::types::*;
use async_trait::async_trait;
use std::sync::Arc;

mod memory;
#[cfg(feature = "sqlite-support")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite-support")]
pub use sqlite::SqliteStore;

/// 存储trait，定义协调层依赖的持久化操作
///
/// `save` 在存储层面是插入或覆盖，存在性检查由协调层负责。
#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// 查询全部记录
    async fn find_all(&self) -> WeatherResult<Vec<WeatherRecord>>;

    /// 根据主键查询记录
    async fn find_by_id(&self, id: &RecordKey) -> WeatherResult<Option<WeatherRecord>>;

    /// 主键是否存在
    async fn exists_by_id(&self, id: &RecordKey) -> WeatherResult<bool>;

    /// 插入或覆盖记录，返回持久化后的记录
    async fn save(&self, record: &WeatherRecord) -> WeatherResult<WeatherRecord>;

    /// 删除记录
    async fn delete(&self, record: &WeatherRecord) -> WeatherResult<()>;

    /// 删除全部记录
    async fn delete_all(&self) -> WeatherResult<()>;
}

/// 根据配置创建存储后端
pub async fn create_store(config: &StoreConfig) -> WeatherResult<Arc<dyn WeatherStore>> {
    match config {
        StoreConfig::Memory => Ok(Arc::new(MemoryStore::new())),
        #[cfg(feature = "sqlite-support")]
        StoreConfig::SQLite { .. } => Ok(Arc::new(SqliteStore::connect(config).await?)),
        #[allow(unreachable_patterns)]
        other => Err(crate::weather_error!(
            config,
            format!("{:?} 存储后端不可用 (可能需要启用相应的feature)", other.store_type())
        )),
    }
}
