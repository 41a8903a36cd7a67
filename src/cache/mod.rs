//! 缓存管理模块
//!
//! 提供按名称注册的内存缓存，支持原子的"不存在才插入"、覆盖写入、
//! 单键驱逐、整体清空以及内容快照。

// 导出所有子模块
pub mod stats;
pub mod named_cache;
pub mod cache_manager;

// 重新导出主要的公共类型和结构体
pub use stats::CacheStats;
pub use named_cache::NamedCache;
pub use cache_manager::CacheManager;
