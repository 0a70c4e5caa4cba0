// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 文档访问错误类型
///
/// 与"元素不存在"不同，这些错误表示页面结构或快照本身出了问题，
/// 会使整次提取尝试作废。
#[derive(Error, Debug)]
pub enum DomError {
    /// 选择器无法解析
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// 快照不可用
    #[error("Snapshot unavailable: {0}")]
    Unavailable(String),
}

/// 元素句柄特质
///
/// 暴露元素的文本和属性访问
pub trait ElementHandle {
    /// 元素的可见文本（空白已折叠并去除首尾空白）
    fn text(&self) -> String;

    /// 读取属性值
    fn attr(&self, name: &str) -> Option<String>;
}

/// 文档快照特质
///
/// 某一时刻的页面DOM，按选择器查找零个、一个或多个元素。
pub trait DocumentSnapshot {
    /// 元素句柄类型
    type Element<'a>: ElementHandle
    where
        Self: 'a;

    /// 页面的绝对URL
    fn url(&self) -> &str;

    /// 返回第一个匹配的元素
    fn select_first(&self, selector: &str) -> Result<Option<Self::Element<'_>>, DomError>;

    /// 按文档顺序返回全部匹配的元素
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Element<'_>>, DomError>;
}

/// 快照来源特质
///
/// 调度器每个周期向来源索取一份新的快照。
pub trait SnapshotSource {
    /// 快照类型
    type Snapshot: DocumentSnapshot;

    /// 采集当前页面的快照
    fn capture(&mut self) -> Result<Self::Snapshot, DomError>;
}
