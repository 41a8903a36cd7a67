use serde::{Deserialize, Serialize};

/// 存储后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreType {
    /// 进程内存储
    Memory,
    /// SQLite
    SQLite,
}

/// 存储后端配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreConfig {
    /// 进程内存储，进程退出即丢失
    Memory,
    /// SQLite 存储
    SQLite {
        /// 数据库文件路径，":memory:" 表示内存数据库
        path: String,
        /// 文件不存在时是否创建
        create_if_missing: bool,
        /// 连接池最大连接数
        max_connections: u32,
    },
}

impl StoreConfig {
    /// 后端类型
    pub fn store_type(&self) -> StoreType {
        match self {
            StoreConfig::Memory => StoreType::Memory,
            StoreConfig::SQLite { .. } => StoreType::SQLite,
        }
    }

    /// SQLite 配置的便捷构造
    pub fn sqlite(path: impl Into<String>) -> Self {
        StoreConfig::SQLite {
            path: path.into(),
            create_if_missing: true,
            max_connections: 5,
        }
    }
}
