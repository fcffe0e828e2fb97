// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含搜索任务编排、结果充实、提示词生成等核心用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体与搜索引擎抽象接口
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成：HTTP 客户端、搜索引擎适配器、页面抓取器
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
