// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{DocumentSnapshot, DomError, ElementHandle};
use scraper::{ElementRef, Html, Selector};

/// 基于 scraper 的HTML快照
///
/// 解析一份渲染后的HTML字符串，按CSS选择器查询。
pub struct HtmlSnapshot {
    url: String,
    document: Html,
}

impl HtmlSnapshot {
    /// 解析HTML内容
    ///
    /// # 参数
    ///
    /// * `url` - 页面的绝对URL
    /// * `html` - 渲染后的页面HTML
    pub fn parse(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }

    fn compile(selector: &str) -> Result<Selector, DomError> {
        Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })
    }
}

impl DocumentSnapshot for HtmlSnapshot {
    type Element<'a> = ElementRef<'a>;

    fn url(&self) -> &str {
        &self.url
    }

    fn select_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>, DomError> {
        let selector = Self::compile(selector)?;
        Ok(self.document.select(&selector).next())
    }

    fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, DomError> {
        let selector = Self::compile(selector)?;
        Ok(self.document.select(&selector).collect())
    }
}

impl ElementHandle for ElementRef<'_> {
    fn text(&self) -> String {
        // Approximates innerText: whitespace runs collapse to one space.
        ElementRef::text(self)
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}
