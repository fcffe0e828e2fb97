// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{info, warn};

use crate::domain::models::search_job::CancelFlag;
use crate::domain::models::search_result::{CONTENT_UNAVAILABLE, INTERRUPTED, NON_HTML_CONTENT};
use crate::infrastructure::http_client::{self, ACCEPT_HTML};
use crate::utils::text_encoding::decode_bytes;
use crate::utils::text_extraction::extract_text;

/// 单个页面抓取的结果
///
/// 抓取层的失败是"软失败"：超时、4xx/5xx、非 HTML 内容等
/// 都以值的形式返回并映射为正文占位串，绝不向上抛错，
/// 单个坏链接不会中止整批抓取。
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 提取出的正文文本
    Text(String),
    /// 网络错误或非 2xx 状态
    Unavailable,
    /// 内容类型不是 HTML
    NonHtml,
    /// 抓取开始前任务已被取消
    Interrupted,
}

impl FetchOutcome {
    /// 映射为结果正文字段的字符串
    pub fn into_content(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unavailable => CONTENT_UNAVAILABLE.to_string(),
            Self::NonHtml => NON_HTML_CONTENT.to_string(),
            Self::Interrupted => INTERRUPTED.to_string(),
        }
    }
}

/// 页面抓取器
///
/// 对结果链接执行 HTTP GET，嗅探编码后交给正文提取器。
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: http_client::build_client(timeout_secs),
        }
    }

    /// 抓取指定 URL 的正文文本
    ///
    /// 发起请求前先检查取消标志；已取消时立即返回
    /// `Interrupted`，不产生任何网络调用。
    pub async fn fetch(&self, url: &str, cancel: &CancelFlag) -> FetchOutcome {
        if cancel.is_cancelled() {
            info!("中断获取页面内容: {}", url);
            return FetchOutcome::Interrupted;
        }

        let response = match self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_HTML)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("获取页面内容失败 ({}): {}", url, e);
                return FetchOutcome::Unavailable;
            }
        };

        if !response.status().is_success() {
            warn!("页面返回非 2xx 状态 ({}): {}", url, response.status());
            return FetchOutcome::Unavailable;
        }

        if !http_client::is_html_content_type(&response) {
            warn!("非HTML内容，跳过: {}", url);
            return FetchOutcome::NonHtml;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("读取页面响应体失败 ({}): {}", url, e);
                return FetchOutcome::Unavailable;
            }
        };

        let html = decode_bytes(&bytes);
        FetchOutcome::Text(extract_text(&html))
    }
}
