// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::engines::html_snapshot::HtmlSnapshot;
use crate::engines::traits::{DomError, SnapshotSource};

/// 文件快照来源
///
/// 每个周期重新读取同一个HTML文件，外部渲染器可以持续改写它。
pub struct FileSnapshotSource {
    path: PathBuf,
    url: String,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

impl SnapshotSource for FileSnapshotSource {
    type Snapshot = HtmlSnapshot;

    fn capture(&mut self) -> Result<HtmlSnapshot, DomError> {
        let html = std::fs::read_to_string(&self.path).map_err(|e| {
            DomError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(HtmlSnapshot::parse(self.url.clone(), &html))
    }
}

/// 内存快照来源
///
/// 依次返回预先给定的页面内容，用完后重复最后一个，
/// 模拟页面逐步渲染的过程。
pub struct StaticSnapshotSource {
    url: String,
    pages: VecDeque<String>,
    last: Option<String>,
    captures: u32,
}

impl StaticSnapshotSource {
    /// 始终返回同一份页面
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self::sequence(url, vec![html.into()])
    }

    /// 按顺序返回多份页面
    pub fn sequence(url: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            url: url.into(),
            pages: pages.into(),
            last: None,
            captures: 0,
        }
    }

    /// 已采集的快照数量
    pub fn captures(&self) -> u32 {
        self.captures
    }
}

impl SnapshotSource for StaticSnapshotSource {
    type Snapshot = HtmlSnapshot;

    fn capture(&mut self) -> Result<HtmlSnapshot, DomError> {
        self.captures += 1;
        if let Some(next) = self.pages.pop_front() {
            self.last = Some(next);
        }
        let html = self
            .last
            .as_deref()
            .ok_or_else(|| DomError::Unavailable("no page content".to_string()))?;
        Ok(HtmlSnapshot::parse(self.url.clone(), html))
    }
}
