//! 日志初始化辅助
//!
//! 库本身不会自动初始化日志，调用方可以直接使用 rat_logger 的
//! `LoggerBuilder`，或者用这里的便捷函数按配置初始化终端日志。

use crate::config::{LogLevel, LoggingConfig};
use crate::error::WeatherResult;
use rat_logger::{LevelFilter, LoggerBuilder, handler::term::TermConfig};

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// 按配置初始化终端日志；`console` 为 false 时不安装任何输出
pub fn init_logger(config: &LoggingConfig) -> WeatherResult<()> {
    if !config.console {
        return Ok(());
    }

    LoggerBuilder::new()
        .with_level(config.level.into())
        .add_terminal_with_config(TermConfig::default())
        .init_global_logger()
        .map_err(|e| crate::weather_error!(config, format!("日志初始化失败: {}", e)))
}
