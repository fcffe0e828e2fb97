// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use searchgpt::application::dto::SearchJobRequest;
use searchgpt::application::orchestrator::Orchestrator;
use searchgpt::config::settings::Settings;
use searchgpt::domain::models::search_job::{CancelFlag, JobStatus};
use searchgpt::utils::telemetry;
use tracing::{info, warn};

/// 主函数
///
/// 命令行参数作为搜索关键词，逐个处理后把组装好的
/// 提示词文档保存到结果文件。Ctrl+C 触发协作式取消，
/// 已收集的部分结果仍会输出。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting searchgpt...");

    // 2. Load configuration
    let settings = Settings::new()?;

    let queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        eprintln!("用法: searchgpt <关键词> [关键词...]");
        std::process::exit(2);
    }

    let request = SearchJobRequest::from_settings(queries, &settings);
    let orchestrator = Orchestrator::new(settings);
    let cancel = CancelFlag::new();

    // 3. Run the job on a background task, cancelling cooperatively on Ctrl+C
    let flag = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("收到停止信号，正在中断搜索...");
            flag.cancel();
        }
    });

    let job = tokio::spawn(async move { orchestrator.run(&request, &cancel).await });
    let outcome = job.await??;

    match outcome.status {
        JobStatus::Completed => info!("搜索完成，共 {} 条结果", outcome.results.len()),
        JobStatus::Interrupted => warn!("搜索被中断，已收集 {} 条结果", outcome.results.len()),
    }
    match &outcome.saved_file {
        Some(path) => println!("结果已保存到: {}", path.display()),
        None => println!("没有保存结果文件"),
    }

    Ok(())
}
