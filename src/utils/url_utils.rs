// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 将可能为相对路径的URL转换为绝对路径URL
///
/// 页面URL无法解析或拼接失败时原样返回 `path`。
pub fn resolve_url(base_url: &str, path: &str) -> String {
    Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map(String::from)
        .unwrap_or_else(|_| path.to_string())
}
