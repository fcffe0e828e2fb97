// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::domain::models::search_result::EngineKind;
use crate::domain::search::engine::SearchEngine;
use crate::infrastructure::search::baidu::BaiduSearch;
use crate::infrastructure::search::bing::BingSearch;
use crate::infrastructure::search::google::GoogleSearch;

/// 根据引擎类型创建对应的搜索引擎实例
pub fn create_engine(kind: EngineKind, timeout_secs: u64) -> Arc<dyn SearchEngine> {
    match kind {
        EngineKind::Google => Arc::new(GoogleSearch::new(timeout_secs)),
        EngineKind::Bing => Arc::new(BingSearch::new(timeout_secs)),
        EngineKind::Baidu => Arc::new(BaiduSearch::new(timeout_secs)),
    }
}
