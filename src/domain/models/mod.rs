// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索结果（search_result）：单条抓取到的搜索条目
/// - 搜索任务（search_job）：一次完整搜索运行的参数与取消标志
pub mod search_job;
pub mod search_result;
