// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::prompt::Language;
use crate::config::settings::Settings;

/// 搜索任务请求
///
/// 引擎以字符串形式传入，由编排器解析：
/// 不认识的引擎名会使整个任务失败，而不是静默回退。
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchJobRequest {
    /// 关键词列表，按提交顺序处理
    #[validate(length(min = 1, message = "至少需要一个搜索关键词"))]
    pub queries: Vec<String>,

    /// 每个关键词期望的结果数量
    #[validate(range(min = 1, max = 20, message = "结果数量必须在 1-20 之间"))]
    pub num_results: u32,

    /// 搜索引擎名称 (google, bing, baidu)
    #[validate(length(min = 1, message = "搜索引擎名称不能为空"))]
    pub engine: String,

    /// 自定义问题，存在时替代关键词出现在提示词问题块中
    pub custom_question: Option<String>,

    /// 提示词语言，缺省时使用配置中的默认语言
    pub language: Option<Language>,
}

impl SearchJobRequest {
    /// 以配置默认值创建请求
    pub fn from_settings(queries: Vec<String>, settings: &Settings) -> Self {
        Self {
            queries,
            num_results: settings.search.default_num_results,
            engine: settings.search.default_engine.clone(),
            custom_question: None,
            language: None,
        }
    }
}
