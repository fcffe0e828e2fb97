// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use searchgpt::domain::models::search_result::{EngineKind, SearchResult};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 生成一段超过兜底阈值的 HTML 正文
pub fn long_html_page(marker: &str) -> String {
    let body = format!("{marker} {}", "filler word ".repeat(40));
    format!("<html><body><article><p>{body}</p></article></body></html>")
}

/// 在 mock 服务器上挂载一个返回 HTML 的端点
pub async fn mount_html_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}

/// 构造一条指向给定链接、正文未抓取的搜索结果
pub fn pending_result(link: &str) -> SearchResult {
    SearchResult::new(
        "Title".to_string(),
        link.to_string(),
        "Snippet".to_string(),
        EngineKind::Google,
    )
}
