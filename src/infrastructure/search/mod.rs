// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供各搜索引擎的结果页抓取与解析实现
/// 包括 Google、Bing、百度三个引擎适配器
/// 三者共享契约但选择器集合各自独立，随引擎改版需要更新
pub mod baidu;
pub mod bing;
pub mod factory;
pub mod google;

use scraper::ElementRef;
use tracing::{error, info};

use crate::domain::search::engine::SearchError;
use crate::infrastructure::http_client::{self, ACCEPT_HTML};
use crate::utils::text_encoding::decode_bytes;

pub use factory::create_engine;

/// 请求搜索结果页并解码为文本
///
/// 搜索请求层面的失败对整个关键词是致命的：
/// 网络错误、非 2xx、非 HTML 内容都直接返回错误。
pub(crate) async fn request_html(
    client: &reqwest::Client,
    url: &str,
    engine_name: &str,
) -> Result<String, SearchError> {
    info!("发送请求到{} URL: {}", engine_name, url);

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .send()
        .await
        .map_err(|e| {
            error!("请求{}失败: {}", engine_name, e);
            SearchError::Network(format!("请求{}失败: {}", engine_name, e))
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("{}搜索返回非 2xx 状态: {}", engine_name, status);
        return Err(SearchError::Network(format!(
            "{}搜索返回状态: {}",
            engine_name, status
        )));
    }

    if !http_client::is_html_content_type(&response) {
        error!("搜索结果页面非HTML内容: {}", url);
        return Err(SearchError::NonHtmlContent(format!(
            "搜索结果页面非HTML内容: {}",
            url
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SearchError::Network(format!("读取{}响应体失败: {}", engine_name, e)))?;

    Ok(decode_bytes(&bytes))
}

/// 取元素文本：各文本节点去除首尾空白后按空格拼接
///
/// 标题与摘要都是单行展示文本，换行压成空格。
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
