// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::search_job::CancelFlag;
use crate::domain::models::search_result::{EngineKind, SearchResult};

/// 搜索层错误类型
///
/// 这里的错误对整个关键词是致命的，会中止整个任务。
/// 单个结果页面的抓取失败不走这条通道，而是在正文字段中
/// 用占位值表达（见 `infrastructure::fetcher`）。
#[derive(Debug, Error, Clone)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Non-HTML search response: {0}")]
    NonHtmlContent(String),
    #[error("Search engine error: {0}")]
    Engine(String),
    #[error("Unsupported search engine: {0}")]
    UnsupportedEngine(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// 搜索引擎统一接口
///
/// 三个引擎适配器共享同一契约，但选择器集合完全不同，
/// 由引擎枚举按值选择实现（组合而非继承）。
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// 执行一次搜索并返回解析后的结果（正文未抓取）
    ///
    /// 返回的结果数量不超过 `num_results`，按文档顺序截取。
    /// 页面解析不出任何结果时返回空列表，不视为错误。
    async fn search(
        &self,
        query: &str,
        num_results: u32,
        cancel: &CancelFlag,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// 本实现对应的引擎类型
    fn kind(&self) -> EngineKind;
}
