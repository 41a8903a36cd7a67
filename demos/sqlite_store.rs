//! 使用 SQLite 存储与配置文件组装服务
//!
//! 运行: cargo run --example sqlite_store --features sqlite-support

use rat_weathercache::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rat_weathercache::init();

    let config_path = std::env::temp_dir().join("rat_weathercache_demo.toml");
    let config = GlobalConfig::builder()
        .store(StoreConfig::sqlite(
            std::env::temp_dir()
                .join("rat_weathercache_demo.db")
                .to_string_lossy()
                .to_string(),
        ))
        .cache(
            CacheConfig::builder()
                .cache_name(WEATHER_CACHE_NAME)
                .enable_stats(true)
                .initial_capacity(64)
                .build()?,
        )
        .logging(
            LoggingConfig::builder()
                .level(LogLevel::Debug)
                .console(true)
                .build()?,
        )
        .build()?;
    config.save_to_file(&config_path)?;

    // 从文件重新加载，演示配置文件流程
    let config = GlobalConfig::from_file(&config_path)?;
    init_logger(&config.logging)?;

    let service = build_service(&config).await?;
    service.delete_all().await?;
    service.save(WeatherRecord::of("US", "Boston", "sunny")).await?;
    service.save(WeatherRecord::of("DE", "Berlin", "cloudy")).await?;

    println!("列表: {:?}", service.get_all().await?);
    println!("Berlin: {:?}", service.get_by_city("DE", "Berlin").await?);
    println!(
        "缓存统计: {:?}",
        service.cache_manager().get_stats(WEATHER_CACHE_NAME)
    );
    Ok(())
}
