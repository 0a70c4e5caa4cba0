// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

/// 标题缺失时的占位值
pub const TITLE_NOT_FOUND: &str = "N/A";

/// 无法从URL推导商品编号时的占位值
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

/// 商品记录实体
///
/// 单次提取尝试从商品页面得到的扁平数据。每次尝试都会重新构建，
/// 返回后不再修改。JSON字段名与输出文档一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// 当前页面URL
    pub url: String,
    /// 抓取时间（ISO-8601，毫秒精度）
    #[serde(serialize_with = "serialize_iso8601", deserialize_with = "deserialize_iso8601")]
    pub captured_at: DateTime<Utc>,
    /// 商品编号，取自URL中 `products/` 之后的部分
    pub identifier: String,
    /// 商品标题，`"N/A"` 表示未找到
    pub title: String,
    /// 规范化后的缩略图URL，未找到时为空
    pub image_url: String,
    /// 面包屑分类路径，不含首页项
    pub categories: Vec<String>,
    /// 星级评分 (0.0-5.0)
    pub star_rating: f64,
    /// 评论数
    pub review_count: u64,
    /// 原价
    pub original_price: u64,
    /// 最终售价
    pub final_price: u64,
}

impl ProductRecord {
    /// 创建一个全部字段为默认值的商品记录
    ///
    /// # 参数
    ///
    /// * `url` - 当前页面URL
    /// * `identifier` - 商品编号
    /// * `captured_at` - 抓取时间
    pub fn new(url: String, identifier: String, captured_at: DateTime<Utc>) -> Self {
        Self {
            url,
            captured_at,
            identifier,
            title: TITLE_NOT_FOUND.to_string(),
            image_url: String::new(),
            categories: Vec::new(),
            star_rating: 0.0,
            review_count: 0,
            original_price: 0,
            final_price: 0,
        }
    }

    /// 记录是否可用于输出
    ///
    /// 要求找到标题，且原价或售价至少有一个非零。评分与评论数不参与判断。
    pub fn is_complete(&self) -> bool {
        self.title != TITLE_NOT_FOUND && (self.final_price != 0 || self.original_price != 0)
    }

    /// 输出文档的文件名
    pub fn file_name(&self) -> String {
        format!("coupang_{}.json", self.identifier)
    }

    /// 序列化为输出文档：UTF-8 JSON，4 空格缩进
    pub fn to_document(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

fn serialize_iso8601<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_iso8601<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
