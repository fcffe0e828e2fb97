// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::domain::models::search_job::CancelFlag;
use crate::domain::models::search_result::{EngineKind, SearchResult, NO_LINK, NO_SNIPPET, NO_TITLE};
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::http_client;
use crate::infrastructure::search::{element_text, request_html};

// Bing 结果页选择器。比 Google 的生成类名稳定，
// 但同样可能随改版静默失效。
static RESULT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.b_algo").expect("valid selector"));

static TITLE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2 > a").expect("valid selector"));

static SNIPPET_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid selector"));

/// Bing 搜索引擎适配器
pub struct BingSearch {
    client: reqwest::Client,
}

impl BingSearch {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: http_client::build_client(timeout_secs),
        }
    }

    /// 解析 Bing 搜索结果页面
    ///
    /// 标题和链接取自同一个锚点；锚点缺失的容器仍以
    /// 占位值生成一条结果。
    fn parse_results(html: &str, query: &str, num_results: u32) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for container in document.select(&RESULT_SELECTOR) {
            if results.len() >= num_results as usize {
                break;
            }

            let anchor = container.select(&TITLE_LINK_SELECTOR).next();

            let title = anchor
                .map(element_text)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TITLE.to_string());

            let link = anchor
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string)
                .unwrap_or_else(|| NO_LINK.to_string());

            let snippet = container
                .select(&SNIPPET_SELECTOR)
                .next()
                .map(element_text)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_SNIPPET.to_string());

            debug!("解析到结果: {}", title);
            results.push(SearchResult::new(title, link, snippet, EngineKind::Bing).with_query(query));
        }

        results
    }
}

#[async_trait]
impl SearchEngine for BingSearch {
    async fn search(
        &self,
        query: &str,
        num_results: u32,
        _cancel: &CancelFlag,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!(
            "https://www.bing.com/search?q={}&count={}",
            urlencoding::encode(query),
            num_results
        );

        let html = request_html(&self.client, &url, "Bing").await?;
        let results = Self::parse_results(&html, query, num_results);
        info!("Bing搜索 '{}' 解析到 {} 条结果", query, results.len());
        Ok(results)
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Bing
    }
}
