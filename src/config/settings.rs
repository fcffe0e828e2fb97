// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::application::prompt::Language;

/// 应用程序配置设置
///
/// 包含搜索、抓取和输出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 搜索配置
    pub search: SearchSettings,
    /// 页面抓取配置
    pub fetch: FetchSettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 默认搜索引擎名称 (google, bing, baidu)
    pub default_engine: String,
    /// 默认每个关键词的结果数量
    pub default_num_results: u32,
    /// 搜索请求超时时间（秒）
    pub request_timeout_secs: u64,
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 并发抓取数量上限
    pub concurrency: usize,
    /// 单个页面抓取超时时间（秒）
    pub request_timeout_secs: u64,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 提示词语言 (en, zh)
    pub language: Language,
    /// 结果文件保存路径（为空时使用系统下载目录）
    pub file_path: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Default search settings
            .set_default("search.default_engine", "google")?
            .set_default("search.default_num_results", 5)?
            .set_default("search.request_timeout_secs", 10)?
            // Default fetch settings
            .set_default("fetch.concurrency", 5)?
            .set_default("fetch.request_timeout_secs", 10)?
            // Default output settings
            .set_default("output.language", "zh")?
            // Environment overrides, e.g. APP__SEARCH__DEFAULT_ENGINE=bing
            .add_source(Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchSettings {
                default_engine: "google".to_string(),
                default_num_results: 5,
                request_timeout_secs: 10,
            },
            fetch: FetchSettings {
                concurrency: 5,
                request_timeout_secs: 10,
            },
            output: OutputSettings {
                language: Language::Zh,
                file_path: None,
            },
        }
    }
}
