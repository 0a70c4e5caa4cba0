// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::config::settings::StorageSettings;
use crate::domain::repositories::document_sink::{DocumentSink, SinkError};

/// 本地目录输出实现
///
/// 把文档写入下载目录，对应浏览器下载到本地的行为
pub struct DirectorySink {
    base_path: PathBuf,
}

impl DirectorySink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(&settings.local_path)
    }

    /// 文档的完整路径
    pub fn full_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// 文件名必须是单个普通路径段，不能带目录或 `..`
    fn is_plain_file_name(name: &str) -> bool {
        let mut components = Path::new(name).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(part)), None) if part == name
        )
    }
}

#[async_trait]
impl DocumentSink for DirectorySink {
    async fn emit(&self, name: &str, content: &[u8]) -> Result<(), SinkError> {
        if !Self::is_plain_file_name(name) {
            return Err(SinkError::Other(format!("invalid document name: {:?}", name)));
        }
        let full_path = self.full_path(name);

        // 确保输出目录存在
        fs::create_dir_all(&self.base_path).await?;

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(content).await?;
        file.flush().await?;

        Ok(())
    }
}

/// 测试用的内存输出实现（用于单元测试）
#[derive(Clone, Default)]
pub struct InMemorySink {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取已输出的文档
    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.data.read().await.get(name).cloned()
    }

    /// 已输出的文档数量
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentSink for InMemorySink {
    async fn emit(&self, name: &str, content: &[u8]) -> Result<(), SinkError> {
        let mut map = self.data.write().await;
        map.insert(name.to_string(), content.to_vec());
        Ok(())
    }
}
