use serde::{Deserialize, Serialize};

/// 复合主键：国家 + 城市
///
/// 相等与哈希按两个字段逐字比较，区分大小写，不做任何归一化。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    /// 国家
    pub country: String,
    /// 城市
    pub city: String,
}

impl RecordKey {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.country, self.city)
    }
}

/// 天气记录
///
/// 序列化时主键字段平铺到记录对象中：
/// `{"country": "US", "city": "Boston", "weather_details": "sunny"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// 记录主键
    #[serde(flatten)]
    pub id: RecordKey,
    /// 天气详情，内容不透明
    #[serde(rename = "weather_details")]
    pub details: String,
}

impl WeatherRecord {
    pub fn new(id: RecordKey, details: impl Into<String>) -> Self {
        Self {
            id,
            details: details.into(),
        }
    }

    /// 便捷构造
    pub fn of(
        country: impl Into<String>,
        city: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::new(RecordKey::new(country, city), details)
    }

    /// 空记录，供需要"未找到"占位对象的上层使用
    pub fn empty() -> Self {
        Self::of("", "", "")
    }

    /// 是否为空占位记录
    pub fn is_empty(&self) -> bool {
        self.id.country.is_empty() && self.id.city.is_empty() && self.details.is_empty()
    }
}
