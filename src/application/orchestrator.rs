// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};
use validator::Validate;

use crate::application::dto::SearchJobRequest;
use crate::application::enricher::Enricher;
use crate::application::output;
use crate::application::prompt::{assemble, Language};
use crate::config::settings::Settings;
use crate::domain::models::search_job::{CancelFlag, JobOutcome, JobStatus, SearchJob};
use crate::domain::models::search_result::{EngineKind, SearchResult};
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::fetcher::PageFetcher;
use crate::infrastructure::search::create_engine;

/// 搜索任务编排器
///
/// 按提交顺序逐个处理关键词：搜索、并发充实正文、
/// 按关键词标记，最后拼接为一个扁平结果列表。
/// 任务完成后自动组装提示词文档并保存到结果文件。
pub struct Orchestrator {
    engines: HashMap<EngineKind, Arc<dyn SearchEngine>>,
    enricher: Enricher,
    settings: Settings,
}

impl Orchestrator {
    /// 以配置创建编排器，注册全部内置引擎
    pub fn new(settings: Settings) -> Self {
        let mut engines: HashMap<EngineKind, Arc<dyn SearchEngine>> = HashMap::new();
        for kind in [EngineKind::Google, EngineKind::Bing, EngineKind::Baidu] {
            engines.insert(kind, create_engine(kind, settings.search.request_timeout_secs));
        }

        let fetcher = PageFetcher::new(settings.fetch.request_timeout_secs);
        let enricher = Enricher::new(fetcher, settings.fetch.concurrency);

        Self {
            engines,
            enricher,
            settings,
        }
    }

    /// 替换指定引擎的实现（测试时注入桩引擎）
    pub fn with_engine(mut self, kind: EngineKind, engine: Arc<dyn SearchEngine>) -> Self {
        self.engines.insert(kind, engine);
        self
    }

    /// 运行一次搜索任务
    ///
    /// 关键词严格串行处理，前一个关键词的搜索与正文充实
    /// 全部结束后才开始下一个。每次取下一个关键词前检查
    /// 取消标志：观察到取消时带着已收集的部分结果以
    /// `Interrupted` 状态返回，取消不是错误。
    /// 引擎层面的失败（不支持的引擎、搜索请求失败）是致命的，
    /// 中止整个任务。
    pub async fn run(
        &self,
        request: &SearchJobRequest,
        cancel: &CancelFlag,
    ) -> Result<JobOutcome, SearchError> {
        request
            .validate()
            .map_err(|e| SearchError::InvalidRequest(e.to_string()))?;

        let kind = EngineKind::parse(&request.engine)?;
        let engine = self
            .engines
            .get(&kind)
            .ok_or_else(|| SearchError::UnsupportedEngine(request.engine.clone()))?;

        let job = SearchJob {
            queries: request.queries.clone(),
            num_results: request.num_results,
            engine: kind,
            custom_question: request.custom_question.clone(),
            cancel: cancel.clone(),
        };

        info!(
            "开始搜索任务: {} 个关键词, 引擎 {}",
            job.queries.len(),
            job.engine
        );

        let mut all_results: Vec<SearchResult> = Vec::new();
        let mut status = JobStatus::Completed;

        for query in &job.queries {
            if job.cancel.is_cancelled() {
                info!("任务在关键词 '{}' 前被取消", query);
                status = JobStatus::Interrupted;
                break;
            }

            let mut results = engine.search(query, job.num_results, &job.cancel).await?;
            info!("关键词 '{}' 返回 {} 条结果", query, results.len());

            for result in &mut results {
                result.query = query.clone();
            }

            self.enricher.enrich(&mut results, &job.cancel).await;
            all_results.extend(results);
        }

        // 只有完整跑完的任务才自动保存；中断的部分结果
        // 仍然返回给调用方，由其决定是否另行保存
        let saved_file = match status {
            JobStatus::Completed => self.save_outcome(request, &all_results),
            JobStatus::Interrupted => {
                info!("任务被中断，跳过自动保存");
                None
            }
        };

        Ok(JobOutcome {
            results: all_results,
            status,
            saved_file,
        })
    }

    /// 组装提示词文档并保存（仅在任务完整结束后调用）
    ///
    /// 没有任何结果时跳过保存；保存失败降级为警告，
    /// 结果本身仍然返回给调用方。
    fn save_outcome(
        &self,
        request: &SearchJobRequest,
        results: &[SearchResult],
    ) -> Option<std::path::PathBuf> {
        if results.is_empty() {
            info!("没有可保存的搜索结果");
            return None;
        }

        let language = self.resolve_language(request);
        let query_line = request.queries.join(", ");
        let document = assemble(
            results,
            &query_line,
            request.custom_question.as_deref(),
            language,
        );

        let path = match &self.settings.output.file_path {
            Some(path) => std::path::PathBuf::from(path),
            None => output::default_output_path(),
        };

        match output::save_prompt(&document, &path) {
            Ok(saved) => Some(saved),
            Err(e) => {
                error!("保存结果文件失败: {}", e);
                warn!("结果文件未保存，搜索结果仍然可用");
                None
            }
        }
    }

    /// 请求中的语言优先于配置默认语言
    fn resolve_language(&self, request: &SearchJobRequest) -> Language {
        request.language.unwrap_or(self.settings.output.language)
    }
}
