// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use searchgpt::domain::models::search_job::CancelFlag;
use searchgpt::infrastructure::fetcher::{FetchOutcome, PageFetcher};
use wiremock::matchers::{headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{long_html_page, mount_html_page};

/// 正常页面：抓取、解码并提取正文
#[tokio::test]
async fn test_fetch_extracts_article_text() {
    let server = MockServer::start().await;
    mount_html_page(&server, "/article", long_html_page("页面正文标记")).await;

    let fetcher = PageFetcher::new(5);
    let outcome = fetcher
        .fetch(&format!("{}/article", server.uri()), &CancelFlag::new())
        .await;

    match outcome {
        FetchOutcome::Text(text) => assert!(text.contains("页面正文标记")),
        other => panic!("expected text outcome, got {:?}", other),
    }
}

/// 抓取请求携带浏览器式请求头
#[tokio::test]
async fn test_fetch_sends_browser_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        // wiremock 按逗号拆分 Accept 头的值，需用 headers 匹配拆分后的形式
        .and(headers(
            "accept",
            vec![
                "text/html",
                "application/xhtml+xml",
                "application/xml;q=0.9",
                "*/*;q=0.8",
            ],
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(long_html_page("header check"), "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(5);
    let outcome = fetcher
        .fetch(&format!("{}/page", server.uri()), &CancelFlag::new())
        .await;
    assert!(matches!(outcome, FetchOutcome::Text(_)));
}

/// GBK 编码页面通过字节嗅探正确解码
#[tokio::test]
async fn test_fetch_decodes_gbk_page() {
    // "中文测试" 的 GBK 字节，放进一段足够长的页面
    let gbk_phrase: &[u8] = &[0xd6, 0xd0, 0xce, 0xc4, 0xb2, 0xe2, 0xca, 0xd4];
    let mut body: Vec<u8> = Vec::new();
    body.extend_from_slice(b"<html><body><article>");
    for _ in 0..40 {
        body.extend_from_slice(b"<p>");
        body.extend_from_slice(gbk_phrase);
        body.extend_from_slice(b" filler text</p>");
    }
    body.extend_from_slice(b"</article></body></html>");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gbk"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(5);
    let outcome = fetcher
        .fetch(&format!("{}/gbk", server.uri()), &CancelFlag::new())
        .await;

    match outcome {
        FetchOutcome::Text(text) => assert!(text.contains("中文测试")),
        other => panic!("expected text outcome, got {:?}", other),
    }
}

/// 非 HTML 内容类型以软失败表达
#[tokio::test]
async fn test_fetch_non_html_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(5);
    let outcome = fetcher
        .fetch(&format!("{}/data.json", server.uri()), &CancelFlag::new())
        .await;
    assert_eq!(outcome, FetchOutcome::NonHtml);
    assert_eq!(outcome.into_content(), "non-HTML content");
}

/// 4xx/5xx 与网络错误都映射为不可用占位值
#[tokio::test]
async fn test_fetch_http_error_is_soft_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(5);

    let outcome = fetcher
        .fetch(&format!("{}/missing", server.uri()), &CancelFlag::new())
        .await;
    assert_eq!(outcome, FetchOutcome::Unavailable);

    // 没有监听者的端口
    let outcome = fetcher
        .fetch("http://127.0.0.1:1/never", &CancelFlag::new())
        .await;
    assert_eq!(outcome, FetchOutcome::Unavailable);
}

/// 已取消的任务不发起任何网络请求
#[tokio::test]
async fn test_cancelled_fetch_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>body</p>", "text/html"))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancelFlag::new();
    cancel.cancel();

    let fetcher = PageFetcher::new(5);
    let outcome = fetcher
        .fetch(&format!("{}/page", server.uri()), &cancel)
        .await;

    assert_eq!(outcome, FetchOutcome::Interrupted);
    // MockServer 在 drop 时校验 expect(0)
}
