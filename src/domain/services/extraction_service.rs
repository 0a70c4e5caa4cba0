// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::settings::SelectorSettings;
use crate::domain::models::product::ProductRecord;
use crate::domain::services::normalizers::{
    compute_star_rating, derive_identifier, extract_digits, normalize_image_url,
};
use crate::engines::traits::{DocumentSnapshot, DomError, ElementHandle};
use crate::utils::url_utils::resolve_url;

/// 提取错误类型
///
/// 表示整次尝试作废；单个元素缺失不属于错误。
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 页面结构错误
    #[error("Structural error: {0}")]
    Dom(#[from] DomError),
}

/// 提取服务
///
/// 负责从商品页面快照中提取 [`ProductRecord`]
pub struct ExtractionService {
    selectors: SelectorSettings,
}

impl Default for ExtractionService {
    fn default() -> Self {
        Self::new(SelectorSettings::default())
    }
}

impl ExtractionService {
    pub fn new(selectors: SelectorSettings) -> Self {
        Self { selectors }
    }

    /// 当前使用的选择器
    pub fn selectors(&self) -> &SelectorSettings {
        &self.selectors
    }

    /// 提取数据，抓取时间取当前时间
    pub fn extract<D: DocumentSnapshot>(&self, document: &D) -> Result<ProductRecord, ExtractError> {
        self.extract_at(document, Utc::now())
    }

    /// 提取数据
    ///
    /// 元素缺失时保留字段默认值；任何结构错误都会使整次尝试失败，
    /// 不会返回只填了一部分的记录。
    ///
    /// # 参数
    ///
    /// * `document` - 页面快照
    /// * `captured_at` - 抓取时间
    pub fn extract_at<D: DocumentSnapshot>(
        &self,
        document: &D,
        captured_at: DateTime<Utc>,
    ) -> Result<ProductRecord, ExtractError> {
        let url = document.url();
        let mut record = ProductRecord::new(url.to_string(), derive_identifier(url), captured_at);

        if let Err(e) = self.fill(document, &mut record) {
            warn!(url = %url, error = %e, "Extraction attempt voided");
            return Err(e.into());
        }

        debug!(
            identifier = %record.identifier,
            title = %record.title,
            final_price = record.final_price,
            "Extraction finished"
        );
        Ok(record)
    }

    fn fill<D: DocumentSnapshot>(
        &self,
        document: &D,
        record: &mut ProductRecord,
    ) -> Result<(), DomError> {
        let s = &self.selectors;

        // 1. Title
        match document.select_first(&s.title)? {
            Some(el) => record.title = el.text().trim().to_string(),
            None => debug!(selector = %s.title, "Title not found"),
        }

        // 2. Image
        if let Some(src) = document
            .select_first(&s.image)?
            .and_then(|el| el.attr("src"))
        {
            let absolute = resolve_url(document.url(), src.trim());
            record.image_url = normalize_image_url(&absolute);
        }

        // 3. Categories, first breadcrumb entry is the home link
        let crumbs = document.select_all(&s.breadcrumb)?;
        if !crumbs.is_empty() {
            record.categories = crumbs
                .iter()
                .skip(1)
                .map(|el| el.text().trim().to_string())
                .collect();
        }

        // 4. Rating
        if let Some(el) = document.select_first(&s.rating)? {
            record.star_rating = compute_star_rating(el.attr("style").as_deref());
        }

        // 5. Review count
        if let Some(el) = document.select_first(&s.review_count)? {
            record.review_count = extract_digits(&el.text());
        }

        // 6. Prices
        match document.select_first(&s.original_price)? {
            Some(el) => record.original_price = extract_digits(&el.text()),
            None => debug!(selector = %s.original_price, "Original price not found"),
        }
        match document.select_first(&s.final_price)? {
            Some(el) => record.final_price = extract_digits(&el.text()),
            None => debug!(selector = %s.final_price, "Final price not found"),
        }

        Ok(())
    }
}
