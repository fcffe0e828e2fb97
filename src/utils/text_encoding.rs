// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use tracing::debug;

/// 从原始字节解码出 UTF-8 文本
///
/// 响应头里的 charset 可能缺失或错误，因此不信任它，
/// 而是用 chardetng 对字节本身做编码嗅探。
/// 解码始终以替换字符处理非法字节，不会失败。
pub fn decode_bytes(input: &[u8]) -> String {
    // UTF-8 优先：合法的 UTF-8 直接返回，跳过检测开销
    if let Ok(utf8_str) = std::str::from_utf8(input) {
        return utf8_str.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(input, true);
    let encoding = detector.guess(None, true);

    debug!("检测到编码: {}", encoding.name());

    let (decoded, _, had_errors) = encoding.decode(input);
    if had_errors {
        debug!("解码包含非法字节，已用替换字符处理");
    }
    decoded.into_owned()
}
