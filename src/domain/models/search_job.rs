// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::models::search_result::{EngineKind, SearchResult};

/// 协作式取消标志
///
/// 每个搜索任务持有一个独立标志，由外部停止信号置位。
/// 各阶段在开始新工作前轮询该标志：新关键词迭代前、
/// 提交单个页面抓取前、以及页面抓取器入口处。
/// 已发出的 HTTP 请求不会被强制打断，允许自然完成或超时。
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 置位取消标志
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// 查询是否已被取消
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}

/// 一次搜索运行的全部参数
///
/// 任务在运行开始时创建，被每个流水线阶段查询，
/// 结果发出或任务被取消后即丢弃，不保留运行之外的状态。
#[derive(Debug, Clone)]
pub struct SearchJob {
    /// 关键词列表（按提交顺序处理）
    pub queries: Vec<String>,
    /// 每个关键词期望的结果数量
    pub num_results: u32,
    /// 选定的搜索引擎
    pub engine: EngineKind,
    /// 自定义问题（存在时替代关键词出现在提示词问题块中）
    pub custom_question: Option<String>,
    /// 取消标志
    pub cancel: CancelFlag,
}

/// 任务的终止状态
///
/// 取消不是错误：`Interrupted` 携带取消前已收集到的部分结果。
/// 致命错误（不支持的引擎、引擎请求失败等）通过 `Err` 传播。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// 全部关键词处理完毕
    Completed,
    /// 在关键词之间观察到取消标志，提前停止
    Interrupted,
}

/// 任务运行的产出
#[derive(Debug)]
pub struct JobOutcome {
    /// 扁平化的结果列表（关键词提交顺序 × 关键词内文档顺序）
    pub results: Vec<SearchResult>,
    /// 终止状态
    pub status: JobStatus,
    /// 自动保存生成的结果文件路径（无内容可保存时为 None）
    pub saved_file: Option<PathBuf>,
}
