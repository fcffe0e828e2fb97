// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use searchgpt::application::dto::SearchJobRequest;
use searchgpt::application::orchestrator::Orchestrator;
use searchgpt::application::prompt::Language;
use searchgpt::config::settings::Settings;
use searchgpt::domain::models::search_job::{CancelFlag, JobStatus};
use searchgpt::domain::models::search_result::{EngineKind, SearchResult, INTERRUPTED};
use searchgpt::domain::search::engine::{SearchEngine, SearchError};
use wiremock::MockServer;

use crate::helpers::{long_html_page, mount_html_page, pending_result};

/// 固定返回指向 mock 服务器链接的桩引擎
struct StubEngine {
    base: String,
    per_query: usize,
}

#[async_trait]
impl SearchEngine for StubEngine {
    async fn search(
        &self,
        query: &str,
        _num_results: u32,
        _cancel: &CancelFlag,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok((0..self.per_query)
            .map(|i| {
                let mut result = pending_result(&format!("{}/{}", self.base, i));
                result.title = format!("{query} #{i}");
                result
            })
            .collect())
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Google
    }
}

/// 在处理指定关键词时置位取消标志的桩引擎
struct CancellingEngine {
    base: String,
    cancel_on: String,
}

#[async_trait]
impl SearchEngine for CancellingEngine {
    async fn search(
        &self,
        query: &str,
        _num_results: u32,
        cancel: &CancelFlag,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if query == self.cancel_on {
            cancel.cancel();
        }
        Ok(vec![pending_result(&format!("{}/0", self.base))])
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Google
    }
}

fn settings_with_output(path: Option<String>) -> Settings {
    let mut settings = Settings::default();
    settings.fetch.request_timeout_secs = 2;
    settings.output.file_path = path;
    settings
}

fn request(queries: &[&str]) -> SearchJobRequest {
    SearchJobRequest {
        queries: queries.iter().map(|q| q.to_string()).collect(),
        num_results: 3,
        engine: "google".to_string(),
        custom_question: None,
        language: None,
    }
}

/// 端到端：搜索、充实、组装、落盘
#[tokio::test]
async fn test_full_job_saves_prompt_document() {
    let server = MockServer::start().await;
    mount_html_page(&server, "/0", long_html_page("第一页正文")).await;
    mount_html_page(&server, "/1", long_html_page("第二页正文")).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("search_results.txt");

    let orchestrator =
        Orchestrator::new(settings_with_output(Some(out_path.display().to_string()))).with_engine(
            EngineKind::Google,
            Arc::new(StubEngine {
                base: server.uri(),
                per_query: 2,
            }),
        );

    let outcome = orchestrator
        .run(&request(&["alpha", "beta"]), &CancelFlag::new())
        .await
        .expect("job should complete");

    assert_eq!(outcome.status, JobStatus::Completed);
    assert_eq!(outcome.results.len(), 4);
    assert!(outcome.results[0].content.contains("第一页正文"));
    assert_eq!(outcome.results[0].query, "alpha");
    assert_eq!(outcome.results[3].query, "beta");

    let saved = outcome.saved_file.expect("file should be saved");
    assert_eq!(saved, out_path);

    let document = std::fs::read_to_string(&saved).expect("read saved file");
    // 默认中文指令，问题块是逗号拼接的关键词
    assert!(document.starts_with("忽略之前的所有指示。"));
    assert!(document.contains("```\nalpha, beta\n```"));
    assert!(document.contains("NUMBER:1\n"));
    assert!(document.contains("NUMBER:4\n"));
    assert!(document.contains("CONTENT: "));
}

/// 请求中的语言覆盖配置默认语言
#[tokio::test]
async fn test_language_override_produces_english_prompt() {
    let server = MockServer::start().await;
    mount_html_page(&server, "/0", long_html_page("body")).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("search_results.txt");

    let orchestrator =
        Orchestrator::new(settings_with_output(Some(out_path.display().to_string()))).with_engine(
            EngineKind::Google,
            Arc::new(StubEngine {
                base: server.uri(),
                per_query: 1,
            }),
        );

    let mut req = request(&["alpha"]);
    req.language = Some(Language::En);
    req.custom_question = Some("What changed?".to_string());

    let outcome = orchestrator
        .run(&req, &CancelFlag::new())
        .await
        .expect("job should complete");

    let document = std::fs::read_to_string(outcome.saved_file.expect("saved")).expect("read");
    assert!(document.starts_with("Ignore all previous instructions."));
    assert!(document.contains("```\nWhat changed?\n```"));
}

/// 处理第一个关键词期间被取消：只返回第一个关键词的
/// 结果，后续关键词不再开始，状态是 Interrupted 而非错误
#[tokio::test]
async fn test_mid_job_cancellation_keeps_partial_results() {
    let server = MockServer::start().await;

    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("search_results.txt");

    let orchestrator =
        Orchestrator::new(settings_with_output(Some(out_path.display().to_string()))).with_engine(
            EngineKind::Google,
            Arc::new(CancellingEngine {
                base: server.uri(),
                cancel_on: "alpha".to_string(),
            }),
        );

    let outcome = orchestrator
        .run(&request(&["alpha", "beta"]), &CancelFlag::new())
        .await
        .expect("cancellation is not an error");

    assert_eq!(outcome.status, JobStatus::Interrupted);
    // 只有 alpha 的结果；取消发生在其充实之前，正文是中断占位值
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].query, "alpha");
    assert_eq!(outcome.results[0].content, INTERRUPTED);
    assert!(!outcome.results.iter().any(|r| r.query == "beta"));

    // 中断的任务不自动保存
    assert!(outcome.saved_file.is_none());
    assert!(!out_path.exists());
}

/// 第一个关键词完整充实后才被取消：其真实正文保留在
/// Interrupted 结果中，且中断任务不写结果文件
#[tokio::test]
async fn test_interrupted_job_keeps_fetched_content_and_skips_save() {
    let server = MockServer::start().await;
    mount_html_page(&server, "/0", long_html_page("第一个关键词的正文")).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("search_results.txt");

    // alpha 正常搜索并充实；beta 的搜索期间置位取消标志，
    // gamma 之前观察到取消
    let orchestrator =
        Orchestrator::new(settings_with_output(Some(out_path.display().to_string()))).with_engine(
            EngineKind::Google,
            Arc::new(CancellingEngine {
                base: server.uri(),
                cancel_on: "beta".to_string(),
            }),
        );

    let outcome = orchestrator
        .run(&request(&["alpha", "beta", "gamma"]), &CancelFlag::new())
        .await
        .expect("cancellation is not an error");

    assert_eq!(outcome.status, JobStatus::Interrupted);
    assert_eq!(outcome.results.len(), 2);
    // alpha 在取消前完成，抓取到的真实正文保留
    assert_eq!(outcome.results[0].query, "alpha");
    assert!(outcome.results[0].content.contains("第一个关键词的正文"));
    // beta 的充实发生在取消之后
    assert_eq!(outcome.results[1].query, "beta");
    assert_eq!(outcome.results[1].content, INTERRUPTED);
    assert!(!outcome.results.iter().any(|r| r.query == "gamma"));

    // 部分结果返回但不落盘
    assert!(outcome.saved_file.is_none());
    assert!(!out_path.exists());
}

/// 不支持的引擎名使整个任务失败
#[tokio::test]
async fn test_unsupported_engine_is_fatal() {
    let orchestrator = Orchestrator::new(settings_with_output(None));
    let mut req = request(&["alpha"]);
    req.engine = "duckduckgo".to_string();

    let err = orchestrator
        .run(&req, &CancelFlag::new())
        .await
        .expect_err("unsupported engine must fail the job");
    assert!(matches!(err, SearchError::UnsupportedEngine(_)));
    assert!(err.to_string().contains("duckduckgo"));
}
