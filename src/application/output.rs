// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// 默认结果文件名
pub const DEFAULT_FILE_NAME: &str = "search_results.txt";

/// 输出层错误类型
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("写入结果文件失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 默认输出路径：系统下载目录下的 search_results.txt
///
/// 找不到用户主目录时退回当前工作目录。
pub fn default_output_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("Downloads").join(DEFAULT_FILE_NAME),
        None => PathBuf::from(DEFAULT_FILE_NAME),
    }
}

/// 将提示词文档写入指定文件（UTF-8，覆盖写）
pub fn save_prompt(content: &str, path: &Path) -> Result<PathBuf, OutputError> {
    info!("尝试将搜索结果保存到文件: {}", path.display());
    std::fs::write(path, content)?;
    info!("搜索结果成功保存到 {}", path.display());
    Ok(path.to_path_buf())
}
