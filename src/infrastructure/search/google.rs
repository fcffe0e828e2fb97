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

// Google 结果页选择器。结果页 class 名由前端构建产物生成，
// 改版后需要整体更新。
static RESULT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.tF2Cxc").expect("valid selector"));

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").expect("valid selector"));

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

/// 摘要候选选择器，按优先级依次尝试
static SNIPPET_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["div.VwiC3b", "div.IsZvec", "div.aCOpRe", "span.aCOpRe"]
        .iter()
        .map(|s| Selector::parse(s).expect("valid selector"))
        .collect()
});

/// Google 搜索引擎适配器
pub struct GoogleSearch {
    client: reqwest::Client,
}

impl GoogleSearch {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: http_client::build_client(timeout_secs),
        }
    }

    /// 解析 Google 搜索结果页面
    ///
    /// 缺失的字段以占位值填充；结果容器一个都没匹配到时
    /// 返回空列表而不是错误。
    fn parse_results(html: &str, query: &str, num_results: u32) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for container in document.select(&RESULT_SELECTOR) {
            if results.len() >= num_results as usize {
                break;
            }

            let title = container
                .select(&TITLE_SELECTOR)
                .next()
                .map(element_text)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TITLE.to_string());

            let link = container
                .select(&LINK_SELECTOR)
                .next()
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
            results.push(SearchResult::new(title, link, snippet, EngineKind::Google).with_query(query));
        }

        results
    }
}

#[async_trait]
impl SearchEngine for GoogleSearch {
    async fn search(
        &self,
        query: &str,
        num_results: u32,
        _cancel: &CancelFlag,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!(
            "https://www.google.com/search?q={}&num={}",
            urlencoding::encode(query),
            num_results
        );

        let html = request_html(&self.client, &url, "Google").await?;
        let results = Self::parse_results(&html, query, num_results);
        info!("Google搜索 '{}' 解析到 {} 条结果", query, results.len());
        Ok(results)
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Google
    }
}
