//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use std::collections::HashMap;
use rat_embed_lang::register_translations;

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    fn entry(zh: &str, en: &str, ja: &str) -> HashMap<String, String> {
        let mut messages = HashMap::new();
        messages.insert("zh-CN".to_string(), zh.to_string());
        messages.insert("en-US".to_string(), en.to_string());
        messages.insert("ja-JP".to_string(), ja.to_string());
        messages
    }

    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 记录已存在
        translations.insert(
            "error.already_exists".to_string(),
            Self::entry(
                "天气记录已存在: {country}/{city}",
                "Weather record already exists: {country}/{city}",
                "天気レコードは既に存在します: {country}/{city}",
            ),
        );

        // 记录不存在
        translations.insert(
            "error.not_found".to_string(),
            Self::entry(
                "天气记录不存在: {country}/{city}",
                "Weather record not found: {country}/{city}",
                "天気レコードが見つかりません: {country}/{city}",
            ),
        );

        // 存储层故障
        translations.insert(
            "error.store_unavailable".to_string(),
            Self::entry(
                "存储层不可用: {message}",
                "Store unavailable: {message}",
                "ストアが利用できません: {message}",
            ),
        );

        // 配置错误
        translations.insert(
            "error.config".to_string(),
            Self::entry(
                "配置错误: {message}",
                "Configuration error: {message}",
                "設定エラー: {message}",
            ),
        );

        // 序列化错误
        translations.insert(
            "error.serialization".to_string(),
            Self::entry(
                "数据序列化失败: {message}",
                "Data serialization failed: {message}",
                "データシリアライズが失敗しました: {message}",
            ),
        );

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::register_all_translations();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}


/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf, set_language, current_language};
