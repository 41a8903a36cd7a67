//! 数据类型定义和配置
//!
//! 定义天气记录、复合主键以及缓存与存储后端的配置类型

pub mod record;
pub mod cache_config;
pub mod store_config;

// 重新导出所有公共类型
pub use record::{RecordKey, WeatherRecord};
pub use cache_config::{CacheConfig, WEATHER_CACHE_NAME};
pub use store_config::{StoreConfig, StoreType};
