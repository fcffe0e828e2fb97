// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：搜索结果、搜索任务等核心实体
/// - 搜索抽象（search）：搜索引擎统一接口与错误类型
///
/// 领域层不依赖于任何外部实现，体现纯粹的业务规则。
pub mod models;
pub mod search;
