//! 进程内存储
//!
//! 基于并发映射的存储后端，主要用于测试与演示

use super::WeatherStore;
use crate::error::WeatherResult;
use crate::types::{RecordKey, WeatherRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use rat_logger::debug;

/// 进程内存储
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<RecordKey, WeatherRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用初始记录创建
    pub fn with_records(records: impl IntoIterator<Item = WeatherRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.records.insert(record.id.clone(), record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl WeatherStore for MemoryStore {
    async fn find_all(&self) -> WeatherResult<Vec<WeatherRecord>> {
        let mut records: Vec<WeatherRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    async fn find_by_id(&self, id: &RecordKey) -> WeatherResult<Option<WeatherRecord>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: &RecordKey) -> WeatherResult<bool> {
        Ok(self.records.contains_key(id))
    }

    async fn save(&self, record: &WeatherRecord) -> WeatherResult<WeatherRecord> {
        self.records.insert(record.id.clone(), record.clone());
        debug!("内存存储写入记录: {}", record.id);
        Ok(record.clone())
    }

    async fn delete(&self, record: &WeatherRecord) -> WeatherResult<()> {
        self.records.remove(&record.id);
        Ok(())
    }

    async fn delete_all(&self) -> WeatherResult<()> {
        self.records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_crud() {
        let store = MemoryStore::new();
        let key = RecordKey::new("US", "Boston");
        assert!(!store.exists_by_id(&key).await.unwrap());

        let saved = store
            .save(&WeatherRecord::of("US", "Boston", "sunny"))
            .await
            .unwrap();
        assert_eq!(saved.details, "sunny");
        assert!(store.exists_by_id(&key).await.unwrap());

        store
            .save(&WeatherRecord::of("US", "Boston", "rainy"))
            .await
            .unwrap();
        assert_eq!(
            store.find_by_id(&key).await.unwrap().unwrap().details,
            "rainy"
        );
        assert_eq!(store.len(), 1);

        store.delete(&saved).await.unwrap();
        assert!(store.find_by_id(&key).await.unwrap().is_none());
    }

    #[test]
    fn test_with_records_overwrites_duplicate_keys() {
        let store = MemoryStore::with_records(vec![
            WeatherRecord::of("US", "Boston", "sunny"),
            WeatherRecord::of("US", "Boston", "foggy"),
        ]);
        let all = tokio_test::block_on(store.find_all()).unwrap();
        assert_eq!(all, vec![WeatherRecord::of("US", "Boston", "foggy")]);
    }

    #[tokio::test]
    async fn test_find_all_sorted_and_delete_all() {
        let store = MemoryStore::with_records(vec![
            WeatherRecord::of("US", "Boston", "sunny"),
            WeatherRecord::of("FR", "Nice", "windy"),
        ]);
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id.country, "FR");

        store.delete_all().await.unwrap();
        assert!(store.is_empty());
    }
}
