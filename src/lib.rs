//! rat_weathercache - 带缓存协调层的天气记录库
//!
//! 以 (国家, 城市) 为键提供天气记录的增删改查，存储前置一层按名称注册的内存缓存：
//! 单条读取走缓存旁路，写入同时落存储与缓存，删除时驱逐缓存，
//! 列表查询在缓存为空时整体预热、非空时直接读缓存。

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod cache;
pub mod store;
pub mod service;
pub mod config;
pub mod logging;
pub mod i18n;

// 重新导出常用类型和函数
pub use error::{WeatherCacheError, WeatherResult};
pub use types::*;
pub use cache::{CacheManager, CacheStats, NamedCache};
pub use store::{MemoryStore, WeatherStore, create_store};
#[cfg(feature = "sqlite-support")]
pub use store::SqliteStore;
pub use service::{WeatherOperations, WeatherService};
pub use config::{
    CacheConfigBuilder, GlobalConfig, GlobalConfigBuilder, LogLevel, LoggingConfig,
    LoggingConfigBuilder,
};
pub use logging::init_logger;

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_weathercache库
///
/// 注册多语言错误消息。日志系统由调用者自行初始化。
pub fn init() {
    i18n::ErrorMessageI18n::init();
}

/// 按全局配置组装服务：创建存储后端与缓存管理器
pub async fn build_service(config: &GlobalConfig) -> WeatherResult<WeatherService> {
    let store = create_store(&config.store).await?;
    let cache_manager = std::sync::Arc::new(CacheManager::new(config.cache.clone()));
    debug_log!("按配置组装天气记录服务: {:?}", config.store.store_type());
    Ok(WeatherService::new(store, cache_manager))
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
