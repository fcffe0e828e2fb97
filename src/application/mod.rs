// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 编排领域逻辑与基础设施，包括：
/// - 请求 DTO 与参数校验（dto）
/// - 结果正文并发充实（enricher）
/// - 多关键词搜索编排（orchestrator）
/// - 提示词文档组装（prompt）
/// - 结果文件输出（output）
pub mod dto;
pub mod enricher;
pub mod orchestrator;
pub mod output;
pub mod prompt;
