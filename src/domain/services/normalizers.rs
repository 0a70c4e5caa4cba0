// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 字段规范化函数
//!
//! 将页面上格式不一的原始文本转换为类型化的字段值。
//! 所有函数都不会失败，无法解析时返回各自的默认值。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::product::UNKNOWN_IDENTIFIER;

/// 缩略图尺寸段，例如 `/remote/550x550/image`
static THUMBNAIL_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/remote/[^/]+/image").expect("thumbnail pattern"));

/// 第一个整数或小数
static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("numeric pattern"));

const THUMBNAIL_REPLACEMENT: &str = "/remote/292x292ex/image";
const PRODUCT_MARKER: &str = "products/";
const MAX_STAR_RATING: f64 = 5.0;

/// 提取字符串中的全部数字
///
/// 去掉所有非数字字符后解析为整数。结果为空或超出 `u64` 范围时返回 0。
pub fn extract_digits(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// 将图片URL改写为 292x292ex 缩略图尺寸
///
/// 只替换第一处 `/remote/<size>/image`；没有该片段时原样返回。
pub fn normalize_image_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    THUMBNAIL_SEGMENT
        .replace(url, THUMBNAIL_REPLACEMENT)
        .into_owned()
}

/// 根据样式中的填充百分比计算星级
///
/// 样式里第一个数字视为 0-100 的百分比，100% 对应 5 星。
/// 结果保留两位小数；缺失或无法解析时为 0.0。
pub fn compute_star_rating(style: Option<&str>) -> f64 {
    let Some(style) = style else {
        return 0.0;
    };

    let percent = NUMERIC_TOKEN
        .find(style)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|p| p.is_finite());

    match percent {
        Some(p) => {
            let rating = ((p / 20.0) * 100.0).round() / 100.0;
            rating.clamp(0.0, MAX_STAR_RATING)
        }
        None => 0.0,
    }
}

/// 从页面URL推导商品编号
///
/// 取第一个 `products/` 之后、下一个 `products/` 或 `?` 之前的部分。
pub fn derive_identifier(url: &str) -> String {
    url.split(PRODUCT_MARKER)
        .nth(1)
        .map(|rest| rest.split('?').next().unwrap_or_default())
        .filter(|id| !id.is_empty())
        .unwrap_or(UNKNOWN_IDENTIFIER)
        .to_string()
}
