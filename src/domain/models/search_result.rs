// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::search::engine::SearchError;

/// 标题解析失败时的占位值
pub const NO_TITLE: &str = "No title";
/// 链接解析失败时的占位值
pub const NO_LINK: &str = "No link";
/// 摘要缺失时的占位值
pub const NO_SNIPPET: &str = "No content";
/// 正文抓取完成前的占位值
pub const FETCH_PENDING: &str = "fetching...";
/// 页面抓取失败（网络错误或非 2xx）时的正文占位值
pub const CONTENT_UNAVAILABLE: &str = "content unavailable";
/// 页面内容类型不是 HTML 时的正文占位值
pub const NON_HTML_CONTENT: &str = "non-HTML content";
/// 任务被中断时的正文占位值
pub const INTERRUPTED: &str = "interrupted";

/// 搜索引擎类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    /// Google 搜索引擎
    Google,
    /// Bing 搜索引擎
    Bing,
    /// 百度搜索引擎
    Baidu,
}

impl EngineKind {
    /// 获取引擎的展示名称（百度保留中文名）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::Baidu => "百度",
        }
    }

    /// 从字符串解析引擎类型
    ///
    /// 不认识的引擎名属于配置错误，整个任务失败。
    pub fn parse(s: &str) -> Result<Self, SearchError> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "bing" => Ok(Self::Bing),
            "baidu" | "百度" => Ok(Self::Baidu),
            other => Err(SearchError::UnsupportedEngine(other.to_string())),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 单条搜索结果
///
/// 引擎适配器保证四个文本字段解析后非空：要么是真实数据，
/// 要么是定义好的占位值，下游格式化无需判空。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub content: String,
    pub engine: EngineKind,
    pub query: String,
}

impl SearchResult {
    /// 创建一条正文尚未抓取的搜索结果
    pub fn new(title: String, link: String, snippet: String, engine: EngineKind) -> Self {
        Self {
            title,
            link,
            snippet,
            content: FETCH_PENDING.to_string(),
            engine,
            query: String::new(),
        }
    }

    /// 标记该结果所属的搜索关键词
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }
}
