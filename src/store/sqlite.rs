//! SQLite 存储
//!
//! 单表 `weather`，以 (country, city) 作为复合主键

use super::WeatherStore;
use crate::error::WeatherResult;
use crate::types::{RecordKey, StoreConfig, WeatherRecord};
use crate::weather_error;
use async_trait::async_trait;
use rat_logger::{debug, info};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS weather (
    country TEXT NOT NULL,
    city TEXT NOT NULL,
    weather_details TEXT NOT NULL,
    PRIMARY KEY (country, city)
)";

/// SQLite 存储
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// 按配置连接数据库并确保表存在
    pub async fn connect(config: &StoreConfig) -> WeatherResult<Self> {
        let StoreConfig::SQLite {
            path,
            create_if_missing,
            max_connections,
        } = config
        else {
            return Err(weather_error!(config, "SQLite存储需要SQLite配置"));
        };

        // 内存数据库每个连接各自独立，只能使用单连接
        let max_connections = if path == ":memory:" {
            info!("连接SQLite内存数据库");
            1
        } else {
            let file_exists = std::path::Path::new(path).exists();
            if !file_exists && !*create_if_missing {
                return Err(weather_error!(store, format!("SQLite数据库文件不存在: {}", path)));
            }
            if !file_exists {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::File::create(path).await?;
            }
            info!("连接SQLite数据库: {}", path);
            (*max_connections).max(1)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(path)
            .await?;
        Self::from_pool(pool).await
    }

    /// 使用已有连接池创建
    pub async fn from_pool(pool: SqlitePool) -> WeatherResult<Self> {
        sqlx::query(CREATE_TABLE_SQL).execute(&pool).await?;
        debug!("SQLite weather 表已就绪");
        Ok(Self { pool })
    }

    fn row_to_record(row: &SqliteRow) -> WeatherResult<WeatherRecord> {
        Ok(WeatherRecord::of(
            row.try_get::<String, _>("country")?,
            row.try_get::<String, _>("city")?,
            row.try_get::<String, _>("weather_details")?,
        ))
    }
}

#[async_trait]
impl WeatherStore for SqliteStore {
    async fn find_all(&self) -> WeatherResult<Vec<WeatherRecord>> {
        let rows = sqlx::query(
            "SELECT country, city, weather_details FROM weather ORDER BY country, city",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(Self::row_to_record).collect()
    }

    async fn find_by_id(&self, id: &RecordKey) -> WeatherResult<Option<WeatherRecord>> {
        let row = sqlx::query(
            "SELECT country, city, weather_details FROM weather WHERE country = ? AND city = ? LIMIT 1",
        )
        .bind(&id.country)
        .bind(&id.city)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn exists_by_id(&self, id: &RecordKey) -> WeatherResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(1) FROM weather WHERE country = ? AND city = ?")
                .bind(&id.country)
                .bind(&id.city)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    async fn save(&self, record: &WeatherRecord) -> WeatherResult<WeatherRecord> {
        sqlx::query(
            "INSERT INTO weather (country, city, weather_details) VALUES (?, ?, ?)
             ON CONFLICT(country, city) DO UPDATE SET weather_details = excluded.weather_details",
        )
        .bind(&record.id.country)
        .bind(&record.id.city)
        .bind(&record.details)
        .execute(&self.pool)
        .await?;
        debug!("SQLite写入记录: {}", record.id);
        Ok(record.clone())
    }

    async fn delete(&self, record: &WeatherRecord) -> WeatherResult<()> {
        sqlx::query("DELETE FROM weather WHERE country = ? AND city = ?")
            .bind(&record.id.country)
            .bind(&record.id.city)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> WeatherResult<()> {
        let result = sqlx::query("DELETE FROM weather").execute(&self.pool).await?;
        debug!("SQLite清空weather表，删除行数: {}", result.rows_affected());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect(&StoreConfig::sqlite(":memory:"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_sqlite_upsert_and_lookup() {
        let store = memory_store().await;
        let key = RecordKey::new("US", "Boston");

        store.save(&WeatherRecord::of("US", "Boston", "sunny")).await.unwrap();
        store.save(&WeatherRecord::of("US", "Boston", "rainy")).await.unwrap();

        assert!(store.exists_by_id(&key).await.unwrap());
        assert_eq!(
            store.find_by_id(&key).await.unwrap(),
            Some(WeatherRecord::of("US", "Boston", "rainy"))
        );
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sqlite_delete() {
        let store = memory_store().await;
        let record = WeatherRecord::of("FR", "Nice", "windy");
        store.save(&record).await.unwrap();
        store.save(&WeatherRecord::of("US", "Boston", "sunny")).await.unwrap();

        store.delete(&record).await.unwrap();
        assert!(!store.exists_by_id(&record.id).await.unwrap());

        store.delete_all().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_without_create_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let config = StoreConfig::SQLite {
            path: path.to_string_lossy().to_string(),
            create_if_missing: false,
            max_connections: 1,
        };
        assert!(SqliteStore::connect(&config).await.is_err());
    }
}
