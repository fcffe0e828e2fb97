// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::domain::models::search_job::CancelFlag;
use crate::domain::models::search_result::{SearchResult, CONTENT_UNAVAILABLE, INTERRUPTED};
use crate::infrastructure::fetcher::PageFetcher;

/// 结果正文充实器
///
/// 对一批搜索结果并发抓取页面正文，并发量由信号量限制。
/// 正文按结果在列表中的位置回填，与各任务的完成先后无关，
/// 结果顺序始终保持引擎返回的文档顺序。
pub struct Enricher {
    fetcher: PageFetcher,
    concurrency: usize,
}

impl Enricher {
    pub fn new(fetcher: PageFetcher, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// 为每条结果抓取正文并就地回填
    ///
    /// 每次提交抓取任务前检查取消标志：一旦观察到取消，
    /// 余下未提交的结果全部标记为中断占位值。已提交的任务
    /// 在抓取器入口处自行检查取消，不会发起新的网络请求。
    /// 单个任务失败只影响该条结果的正文，不中止整批。
    pub async fn enrich(&self, results: &mut [SearchResult], cancel: &CancelFlag) {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut handles: Vec<Option<JoinHandle<String>>> = Vec::with_capacity(results.len());

        for result in results.iter() {
            if cancel.is_cancelled() {
                // 余下的槽位不再提交
                handles.push(None);
                continue;
            }

            let permit_source = Arc::clone(&semaphore);
            let fetcher = self.fetcher.clone();
            let link = result.link.clone();
            let flag = cancel.clone();

            handles.push(Some(tokio::spawn(async move {
                // 信号量不会被关闭，acquire 只会成功
                let _permit = permit_source.acquire().await;
                fetcher.fetch(&link, &flag).await.into_content()
            })));
        }

        for (result, handle) in results.iter_mut().zip(handles) {
            result.content = match handle {
                Some(handle) => match handle.await {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("抓取任务异常终止 ({}): {}", result.link, e);
                        CONTENT_UNAVAILABLE.to_string()
                    }
                },
                None => INTERRUPTED.to_string(),
            };
        }

        info!("完成 {} 条结果的正文充实", results.len());
    }
}
