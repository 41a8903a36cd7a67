//! 天气记录服务模块
//!
//! 协调缓存与存储：读取走缓存旁路，写入同时落存储与缓存，删除时驱逐缓存，
//! 列表查询在缓存为空时整体预热、非空时直接读缓存。

mod traits;
mod weather_service;

pub use traits::WeatherOperations;
pub use weather_service::WeatherService;
