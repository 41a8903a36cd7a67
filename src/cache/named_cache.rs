//! 命名缓存模块
//!
//! 单个命名缓存的键值容器，基于分片并发映射实现，所有操作均不涉及 IO

use super::stats::{CacheCounters, CacheStats};
use crate::types::{RecordKey, WeatherRecord};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rat_logger::debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// 命名缓存
///
/// `put_if_absent` 借助分片写锁完成比较与插入，对同一个键是原子的；
/// `evict_all` 清空映射但缓存本身仍保留在注册表中。
///
/// 每次驱逐都会先推进驱逐代数，再删除条目。回源读取在访问存储前记下代数，
/// 回填时通过 `fill` 在条目锁内比对，期间发生过驱逐就放弃写入。
#[derive(Debug)]
pub struct NamedCache {
    name: String,
    entries: DashMap<RecordKey, WeatherRecord>,
    generation: AtomicU64,
    counters: CacheCounters,
    enable_stats: bool,
}

impl NamedCache {
    /// 创建新的命名缓存
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0, true)
    }

    pub(crate) fn with_capacity(name: impl Into<String>, capacity: usize, enable_stats: bool) -> Self {
        Self {
            name: name.into(),
            entries: DashMap::with_capacity(capacity),
            generation: AtomicU64::new(0),
            counters: CacheCounters::default(),
            enable_stats,
        }
    }

    /// 缓存名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 读取单个条目
    pub fn get(&self, key: &RecordKey) -> Option<WeatherRecord> {
        let found = self.entries.get(key).map(|entry| entry.value().clone());
        if self.enable_stats {
            match found {
                Some(_) => self.counters.record_hit(),
                None => self.counters.record_miss(),
            }
        }
        found
    }

    /// 仅当键不存在时插入
    ///
    /// 返回插入前已存在的值；返回 `None` 表示本次插入成功。
    pub fn put_if_absent(&self, key: RecordKey, value: WeatherRecord) -> Option<WeatherRecord> {
        match self.entries.entry(key) {
            Entry::Occupied(existing) => Some(existing.get().clone()),
            Entry::Vacant(slot) => {
                slot.insert(value);
                self.record_write();
                None
            }
        }
    }

    /// 当前驱逐代数
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// 回源结果回填
    ///
    /// 键已存在时保留现有值并返回它；自 `generation` 以来发生过驱逐时不写入，
    /// 返回 `None`；否则插入并返回插入的值。
    pub fn fill(&self, key: RecordKey, value: WeatherRecord, generation: u64) -> Option<WeatherRecord> {
        match self.entries.entry(key) {
            Entry::Occupied(existing) => Some(existing.get().clone()),
            Entry::Vacant(slot) => {
                if self.generation() != generation {
                    debug!("回填期间发生驱逐，放弃写入: cache={}, key={}", self.name, slot.key());
                    return None;
                }
                slot.insert(value.clone());
                self.record_write();
                Some(value)
            }
        }
    }

    /// 插入或覆盖
    pub fn put(&self, key: RecordKey, value: WeatherRecord) {
        self.entries.insert(key, value);
        self.record_write();
    }

    /// 驱逐单个条目，不存在时只推进驱逐代数
    pub fn evict(&self, key: &RecordKey) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if self.entries.remove(key).is_some() {
            self.record_evictions(1);
            debug!("缓存条目已驱逐: cache={}, key={}", self.name, key);
        }
    }

    /// 驱逐全部条目
    pub fn evict_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut count = 0u64;
        self.entries.retain(|_, _| {
            count += 1;
            false
        });
        self.record_evictions(count);
        debug!("缓存已清空: cache={}, 驱逐条目数={}", self.name, count);
    }

    fn record_write(&self) {
        if self.enable_stats {
            self.counters.record_write();
        }
    }

    fn record_evictions(&self, count: u64) {
        if self.enable_stats {
            self.counters.record_evictions(count);
        }
    }

    /// 当前内容的快照，顺序不确定
    pub fn values(&self) -> Vec<WeatherRecord> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn contains_key(&self, key: &RecordKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 统计快照
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(&self.name, self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn boston(details: &str) -> WeatherRecord {
        WeatherRecord::of("US", "Boston", details)
    }

    #[test]
    fn test_put_if_absent_keeps_existing() {
        let cache = NamedCache::new("weather");
        let key = RecordKey::new("US", "Boston");

        assert_eq!(cache.put_if_absent(key.clone(), boston("sunny")), None);
        assert_eq!(
            cache.put_if_absent(key.clone(), boston("stale")),
            Some(boston("sunny"))
        );
        assert_eq!(cache.get(&key), Some(boston("sunny")));
    }

    #[test]
    fn test_put_overwrites() {
        let cache = NamedCache::new("weather");
        let key = RecordKey::new("US", "Boston");
        cache.put(key.clone(), boston("sunny"));
        cache.put(key.clone(), boston("rainy"));
        assert_eq!(cache.get(&key), Some(boston("rainy")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_evict_and_evict_all() {
        let cache = NamedCache::new("weather");
        cache.put(RecordKey::new("US", "Boston"), boston("sunny"));
        cache.put(
            RecordKey::new("FR", "Nice"),
            WeatherRecord::of("FR", "Nice", "windy"),
        );

        cache.evict(&RecordKey::new("US", "Boston"));
        cache.evict(&RecordKey::new("US", "Boston"));
        assert_eq!(cache.len(), 1);
        assert!(!cache.contains_key(&RecordKey::new("US", "Boston")));

        cache.evict_all();
        assert!(cache.is_empty());
        assert!(cache.values().is_empty());
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let cache = NamedCache::new("weather");
        let key = RecordKey::new("US", "Boston");
        assert!(cache.get(&key).is_none());
        cache.put(key.clone(), boston("sunny"));
        assert!(cache.get(&key).is_some());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_disabled_stats_skip_all_counters() {
        let cache = NamedCache::with_capacity("weather", 4, false);
        let key = RecordKey::new("US", "Boston");
        cache.put(key.clone(), boston("sunny"));
        assert!(cache.get(&key).is_some());
        cache.evict(&key);
        cache.put_if_absent(key, boston("rainy"));
        cache.evict_all();

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.writes, 0);
        assert_eq!(stats.evictions, 0);
    }

    #[test]
    fn test_fill_skipped_after_eviction() {
        let cache = NamedCache::new("weather");
        let key = RecordKey::new("US", "Boston");

        let generation = cache.generation();
        cache.evict(&key);
        assert_eq!(cache.fill(key.clone(), boston("stale"), generation), None);
        assert!(!cache.contains_key(&key));

        let generation = cache.generation();
        assert_eq!(cache.fill(key.clone(), boston("sunny"), generation), Some(boston("sunny")));
        cache.put(key.clone(), boston("rainy"));
        assert_eq!(cache.fill(key.clone(), boston("sunny"), generation), Some(boston("rainy")));
        assert_eq!(cache.get(&key), Some(boston("rainy")));
    }

    #[test]
    fn test_evict_all_bumps_generation_and_counts_removed() {
        let cache = NamedCache::new("weather");
        cache.put(RecordKey::new("US", "Boston"), boston("sunny"));
        cache.put(RecordKey::new("FR", "Nice"), WeatherRecord::of("FR", "Nice", "windy"));

        let generation = cache.generation();
        cache.evict_all();
        assert!(cache.generation() > generation);
        assert_eq!(cache.stats().evictions, 2);
        assert_eq!(
            cache.fill(RecordKey::new("US", "Boston"), boston("sunny"), generation),
            None
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_put_if_absent_single_winner() {
        let cache = Arc::new(NamedCache::new("weather"));
        let key = RecordKey::new("US", "Boston");

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cache = cache.clone();
                let key = key.clone();
                std::thread::spawn(move || {
                    cache.put_if_absent(key, boston(&format!("writer-{}", i)))
                })
            })
            .collect();

        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|previous| previous.is_none())
            .count();

        assert_eq!(inserted, 1);
        assert_eq!(cache.len(), 1);
    }
}
