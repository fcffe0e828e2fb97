// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use searchgpt::application::output::{save_prompt, DEFAULT_FILE_NAME};
use searchgpt::application::prompt::{assemble_at, Language};
use searchgpt::domain::models::search_result::{EngineKind, SearchResult};

fn enriched_result(n: usize) -> SearchResult {
    let mut result = SearchResult::new(
        format!("标题 {n}"),
        format!("https://example.com/{n}"),
        format!("摘要 {n}"),
        EngineKind::Baidu,
    );
    result.content = format!("正文 {n}");
    result
}

/// 组装的文档保存后逐字节还原
#[tokio::test]
async fn test_prompt_document_round_trip() {
    let results = vec![enriched_result(1), enriched_result(2)];
    let timestamp = NaiveDate::from_ymd_opt(2025, 8, 30)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let document = assemble_at(&results, "分布式系统", None, Language::Zh, timestamp);
    assert!(document.contains("今天的日期是 2025-08-30 09:00:00"));
    assert!(document.contains("NUMBER:1\nURL: https://example.com/1\n"));
    assert!(document.contains("TITLE: 标题 2\n"));
    assert!(document.contains("CONTENT: 正文 2\n"));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_FILE_NAME);
    let saved = save_prompt(&document, &path).expect("save");

    let read_back = std::fs::read_to_string(saved).expect("read");
    assert_eq!(read_back, document);
}

/// 占位正文原样进入文档，下游无需判空
#[tokio::test]
async fn test_placeholder_contents_kept_verbatim() {
    let mut result = enriched_result(1);
    result.content = "content unavailable".to_string();

    let timestamp = NaiveDate::from_ymd_opt(2025, 8, 30)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let document = assemble_at(&[result], "q", None, Language::En, timestamp);
    assert!(document.contains("CONTENT: content unavailable\n"));
}
