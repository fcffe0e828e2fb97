// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::SearchResult;

/// 提示词语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 英文
    En,
    /// 中文
    Zh,
}

/// 英文指令模板的固定段落
const EN_PREAMBLE: &str = "Ignore all previous instructions. You are a knowledgeable and helpful person that can answer any questions. Your task is to answer the following question delimited by triple backticks. Please answer in English.\n\nQuestion:\n```\n";

const EN_CONTEXT: &str = "It's possible that the question, or just a portion of it, requires relevant information from the internet to give a satisfactory answer. The relevant search results provided below, delimited by triple quotes, are the necessary information already obtained from the internet. The search results set the context for addressing the question, so you don't need to access the internet to answer the question.\n\nWrite a comprehensive answer to the question in the best way you can. If necessary, use the provided search results.\n\n";

const EN_CITATION: &str = "If you use any of the search results in your answer, always cite the sources at the end of the corresponding line, similar to how Wikipedia.org cites information. Use the citation format [NUMBER], where both the NUMBER and URL correspond to the provided search results below, delimited by triple quotes.\n\nPresent the answer in a clear format.\nUse a numbered list if it clarifies things\n---\n\n";

const EN_FALLBACK: &str = "If you can't find enough information in the search results and you're not sure about the answer, try your best to give a helpful response by using all the information you have from the search results.\n\n";

/// 中文指令模板的固定段落
const ZH_PREAMBLE: &str = "忽略之前的所有指示。你是一个知识渊博且乐于助人的人，可以回答任何问题。你的任务是回答以下被三个反引号分隔的问题。请用中文回答。\n\n问题：\n```\n";

const ZH_CONTEXT: &str = "问题可能需要互联网相关的信息来给出满意的答案。下面提供的被三个引号分隔的相关搜索结果是已经从互联网获取的必要信息。这些搜索结果为回答问题提供了上下文，因此你不需要访问互联网来回答问题。\n\n请用你能做到的最佳方式写出对问题的全面回答。如果有必要，使用提供的搜索结果。\n\n";

const ZH_CITATION: &str = "如果你在回答中使用了任何搜索结果，请始终在相应行的末尾引用来源，类似于Wikipedia.org引用信息的方式。使用引用格式[编号]，其中编号和URL对应于下面被三个引号分隔的提供的搜索结果。\n\n以清晰的格式呈现答案。\n如果有助于澄清，请使用编号列表。\n---\n\n";

const ZH_FALLBACK: &str = "如果你在搜索结果中找不到足够的信息，并且不确定答案，请尽力利用所有来自搜索结果的信息提供有帮助的回答。\n\n";

/// 用当前本地时间组装提示词文档
pub fn assemble(
    results: &[SearchResult],
    query: &str,
    custom_question: Option<&str>,
    language: Language,
) -> String {
    assemble_at(
        results,
        query,
        custom_question,
        language,
        Local::now().naive_local(),
    )
}

/// 用指定时间戳组装提示词文档
///
/// 文档结构：指令段落、反引号分隔的问题块、当天日期、
/// 引用约定，最后是三引号分隔的结果列表。结果按列表顺序
/// 从 1 开始编号，每条包含 NUMBER/URL/TITLE/SNIPPET/CONTENT。
/// 空结果列表也会生成文档，结果区为空。
pub fn assemble_at(
    results: &[SearchResult],
    query: &str,
    custom_question: Option<&str>,
    language: Language,
    timestamp: NaiveDateTime,
) -> String {
    let datetime = timestamp.format("%Y-%m-%d %H:%M:%S");
    let question = custom_question.unwrap_or(query);

    let mut content = String::new();
    match language {
        Language::En => {
            content.push_str(EN_PREAMBLE);
            content.push_str(question);
            content.push_str("\n```\n\n");
            content.push_str(EN_CONTEXT);
            content.push_str(&format!(
                "For your reference, today's date is {}.\n\n",
                datetime
            ));
            content.push_str("---\n\n");
            content.push_str(EN_CITATION);
            content.push_str(EN_FALLBACK);
        }
        Language::Zh => {
            content.push_str(ZH_PREAMBLE);
            content.push_str(question);
            content.push_str("\n```\n\n");
            content.push_str(ZH_CONTEXT);
            content.push_str(&format!("供参考，今天的日期是 {}。\n\n", datetime));
            content.push_str("---\n\n");
            content.push_str(ZH_CITATION);
            content.push_str(ZH_FALLBACK);
        }
    }

    content.push_str("Search results:\n\"\"\"\n");
    for (idx, result) in results.iter().enumerate() {
        content.push_str(&format!("NUMBER:{}\n", idx + 1));
        content.push_str(&format!("URL: {}\n", result.link));
        content.push_str(&format!("TITLE: {}\n", result.title));
        content.push_str(&format!("SNIPPET: {}\n", result.snippet));
        content.push_str(&format!("CONTENT: {}\n\n", result.content));
    }
    content.push_str("\"\"\"\n");

    content
}
