// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供外部服务集成，包括：
/// - HTTP 客户端构建（http_client）
/// - 搜索引擎适配器（search）：Google、Bing、百度
/// - 页面抓取器（fetcher）：抓取结果页正文
pub mod fetcher;
pub mod http_client;
pub mod search;
