// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 输出错误类型
#[derive(Error, Debug)]
pub enum SinkError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 输出错误
    #[error("Sink error: {0}")]
    Other(String),
}

/// 文档输出特质
///
/// 由宿主环境提供，接收文件名和内容，负责实际的持久化或下载
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// 以指定文件名输出文档
    async fn emit(&self, name: &str, content: &[u8]) -> Result<(), SinkError>;
}
