//! 对上层路由暴露的操作接口

use crate::error::WeatherResult;
use crate::types::WeatherRecord;
use async_trait::async_trait;

/// 天气记录操作trait
///
/// 上层路由只依赖这六个操作，每个操作都可能返回 `AlreadyExists`、
/// `NotFound` 或存储层错误。
#[async_trait]
pub trait WeatherOperations: Send + Sync {
    /// 列出全部记录
    async fn get_all(&self) -> WeatherResult<Vec<WeatherRecord>>;

    /// 按国家和城市查询，`None` 表示记录不存在
    async fn get_by_city(&self, country: &str, city: &str) -> WeatherResult<Option<WeatherRecord>>;

    /// 创建记录
    async fn save(&self, record: WeatherRecord) -> WeatherResult<WeatherRecord>;

    /// 更新已存在记录的天气详情
    async fn update(&self, details: &str, country: &str, city: &str) -> WeatherResult<WeatherRecord>;

    /// 删除记录，记录不存在时不报错
    async fn delete(&self, country: &str, city: &str) -> WeatherResult<()>;

    /// 删除全部记录
    async fn delete_all(&self) -> WeatherResult<()>;
}
