//! 错误处理模块
//!
//! 定义天气缓存库的统一错误类型与结果别名

use thiserror::Error;

/// 天气缓存库统一错误类型
#[derive(Error, Debug)]
pub enum WeatherCacheError {
    /// 创建时记录已存在
    #[error("{}", keyed_message("error.already_exists", .country, .city))]
    AlreadyExists { country: String, city: String },

    /// 更新时记录不存在
    #[error("{}", keyed_message("error.not_found", .country, .city))]
    NotFound { country: String, city: String },

    /// 存储层故障，原样向上传递
    #[error("{}", plain_message("error.store_unavailable", .message))]
    StoreUnavailable { message: String },

    /// 配置错误
    #[error("{}", plain_message("error.config", .message))]
    ConfigError { message: String },

    /// 序列化错误
    #[error("{}", plain_message("error.serialization", .message))]
    SerializationError { message: String },

    /// IO 错误
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),
}

fn keyed_message(key: &str, country: &str, city: &str) -> String {
    crate::i18n::tf(key, &[("country", country), ("city", city)])
}

fn plain_message(key: &str, message: &str) -> String {
    crate::i18n::tf(key, &[("message", message)])
}

/// 结果类型别名
pub type WeatherResult<T> = Result<T, WeatherCacheError>;

impl WeatherCacheError {
    /// 是否为存储层故障
    pub fn is_store_error(&self) -> bool {
        matches!(self, WeatherCacheError::StoreUnavailable { .. })
    }
}

impl From<serde_json::Error> for WeatherCacheError {
    fn from(e: serde_json::Error) -> Self {
        WeatherCacheError::SerializationError {
            message: e.to_string(),
        }
    }
}

#[cfg(feature = "sqlite-support")]
impl From<sqlx::Error> for WeatherCacheError {
    fn from(e: sqlx::Error) -> Self {
        WeatherCacheError::StoreUnavailable {
            message: e.to_string(),
        }
    }
}

/// 快速构造只带消息的错误
///
/// ```ignore
/// weather_error!(config, "缓存名称不能为空")
/// weather_error!(store, format!("连接失败: {}", e))
/// ```
#[macro_export]
macro_rules! weather_error {
    (store, $msg:expr) => {
        $crate::error::WeatherCacheError::StoreUnavailable {
            message: $msg.to_string(),
        }
    };
    (config, $msg:expr) => {
        $crate::error::WeatherCacheError::ConfigError {
            message: $msg.to_string(),
        }
    };
    (already_exists, $key:expr) => {
        $crate::error::WeatherCacheError::AlreadyExists {
            country: $key.country.clone(),
            city: $key.city.clone(),
        }
    };
    (not_found, $key:expr) => {
        $crate::error::WeatherCacheError::NotFound {
            country: $key.country.clone(),
            city: $key.city.clone(),
        }
    };
}
