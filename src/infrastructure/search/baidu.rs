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

// 百度结果页选择器。链接是百度的跳转地址，保留原样。
static RESULT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.result").expect("valid selector"));

static TITLE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3 > a").expect("valid selector"));

/// 摘要候选选择器，按优先级依次尝试
static SNIPPET_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["div.c-abstract", "div.c-span18.c-span-last"]
        .iter()
        .map(|s| Selector::parse(s).expect("valid selector"))
        .collect()
});

/// 百度搜索引擎适配器
pub struct BaiduSearch {
    client: reqwest::Client,
}

impl BaiduSearch {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: http_client::build_client(timeout_secs),
        }
    }

    /// 解析百度搜索结果页面
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

            let snippet = SNIPPET_SELECTORS
                .iter()
                .find_map(|selector| {
                    container
                        .select(selector)
                        .next()
                        .map(element_text)
                        .filter(|s| !s.is_empty())
                })
                .unwrap_or_else(|| NO_SNIPPET.to_string());

            debug!("解析到结果: {}", title);
            results.push(SearchResult::new(title, link, snippet, EngineKind::Baidu).with_query(query));
        }

        results
    }
}

#[async_trait]
impl SearchEngine for BaiduSearch {
    async fn search(
        &self,
        query: &str,
        num_results: u32,
        _cancel: &CancelFlag,
    ) -> Result<Vec<SearchResult>, SearchError> {
        // ie=utf-8 避免百度按 GBK 解释查询词
        let url = format!(
            "https://www.baidu.com/s?wd={}&rn={}&ie=utf-8",
            urlencoding::encode(query),
            num_results
        );

        let html = request_html(&self.client, &url, "百度").await?;
        let results = Self::parse_results(&html, query, num_results);
        info!("百度搜索 '{}' 解析到 {} 条结果", query, results.len());
        Ok(results)
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Baidu
    }
}
