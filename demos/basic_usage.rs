//! rat_weathercache 基本使用示例
//!
//! 本示例展示缓存协调层的基本行为：
//! 冷缓存整体预热、单条缓存旁路读取、写穿透、删除驱逐以及缓存内容查看。

use rat_logger::{LoggerBuilder, handler::term::TermConfig};
use rat_weathercache::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    LoggerBuilder::new()
        .add_terminal_with_config(TermConfig::default())
        .init_global_logger()
        .expect("日志初始化失败");

    rat_weathercache::init();
    println!("=== rat_weathercache 基本使用示例 ===");
    println!("库版本: {}", rat_weathercache::get_info());

    // 1. 准备存储与缓存管理器
    println!("\n1. 准备存储与缓存管理器...");
    let store = Arc::new(MemoryStore::with_records(vec![
        WeatherRecord::of("US", "Boston", "sunny"),
        WeatherRecord::of("FR", "Nice", "windy"),
    ]));
    let cache_manager = Arc::new(CacheManager::default());
    let service = WeatherService::new(store, cache_manager.clone());

    // 2. 冷缓存列表查询会回源并预热
    println!("\n2. 列表查询（冷缓存）...");
    let all = service.get_all().await?;
    println!("回源记录数: {}", all.len());
    println!("缓存内容: {:?}", cache_manager.list_cache_contents(WEATHER_CACHE_NAME)?);

    // 3. 单条查询与写入
    println!("\n3. 单条查询与写入...");
    println!("Boston: {:?}", service.get_by_city("US", "Boston").await?);
    service.save(WeatherRecord::of("JP", "Osaka", "humid")).await?;
    service.update("rainy", "US", "Boston").await?;
    println!("更新后的 Boston: {:?}", service.get_by_city("US", "Boston").await?);

    match service.save(WeatherRecord::of("JP", "Osaka", "dry")).await {
        Ok(_) => println!("❌ 重复创建不应成功"),
        Err(e) => println!("✅ 重复创建被拒绝: {}", e),
    }

    // 4. 删除与清空
    println!("\n4. 删除与清空...");
    service.delete("FR", "Nice").await?;
    service.delete("FR", "Nice").await?;
    println!("删除后列表: {:?}", service.get_all().await?);

    if let Some(stats) = cache_manager.get_stats(WEATHER_CACHE_NAME) {
        println!("缓存统计: {:?}", stats);
    }

    service.delete_all().await?;
    println!("清空后列表: {:?}", service.get_all().await?);

    println!("\n=== 示例完成 ===");
    Ok(())
}
