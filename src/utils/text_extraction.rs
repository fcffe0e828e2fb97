// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// 两次提取都为空时返回的占位值
pub const EXTRACT_EMPTY: &str = "no content";

/// 主提取结果短于该阈值时，改用整页兜底提取
///
/// 过短的提取结果通常意味着页面结构与预期不符。
const MIN_EXTRACT_LEN: usize = 200;

static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("valid selector"));

static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, h1, h2, h3, h4, h5, h6, li").expect("valid selector"));

static CONTROL_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F]").expect("valid regex"));

/// 从 HTML 中尽力提取可读正文
///
/// 优先提取第一个 `<article>` 内的块级内容标签
/// （p、h1-h6、li），标签内文本按换行拼接，标签之间以
/// 空行分隔，近似保留段落结构；没有 `<article>` 时扫描整页。
/// 结果会去除 ASCII 控制字符；主提取过短时退回整页提取。
/// 两次都为空则返回固定占位值，永不返回空串。
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let primary = match document.select(&ARTICLE_SELECTOR).next() {
        Some(article) => collect_block_text(article),
        None => collect_document_text(&document),
    };
    let primary = strip_control_chars(&primary);

    let extracted = if primary.chars().count() < MIN_EXTRACT_LEN {
        let fallback = strip_control_chars(&collect_document_text(&document));
        if fallback.is_empty() {
            primary
        } else {
            fallback
        }
    } else {
        primary
    };

    if extracted.is_empty() {
        EXTRACT_EMPTY.to_string()
    } else {
        extracted
    }
}

/// 提取单个元素范围内所有块级内容标签的文本
fn collect_block_text(root: ElementRef<'_>) -> String {
    root.select(&BLOCK_SELECTOR)
        .map(inner_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 提取整个文档中所有块级内容标签的文本
fn collect_document_text(document: &Html) -> String {
    document
        .select(&BLOCK_SELECTOR)
        .map(inner_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 取元素的内部文本：各文本节点去除首尾空白后按换行拼接
fn inner_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 去除 ASCII 控制字符（0x00-0x1F、0x7F）
fn strip_control_chars(text: &str) -> String {
    CONTROL_CHAR_REGEX.replace_all(text, "").into_owned()
}
