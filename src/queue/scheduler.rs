// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::domain::models::product::ProductRecord;
use crate::domain::repositories::document_sink::{DocumentSink, SinkError};
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::SnapshotSource;
use crate::utils::retry_policy::RetryPolicy;

/// 调度器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// 轮询中
    Polling,
    /// 已得到可用记录
    Succeeded,
    /// 尝试次数耗尽
    Exhausted,
}

impl SchedulerState {
    /// 是否为终止状态
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SchedulerState::Polling)
    }
}

/// 单个周期的结果
#[derive(Debug)]
pub enum TickOutcome {
    /// 本次尝试未满足条件，继续轮询
    Pending { attempt: u32 },
    /// 得到可用记录
    Succeeded(ProductRecord),
    /// 预算耗尽
    Exhausted { attempts: u32 },
    /// 调度器已终止，未做任何提取
    Idle,
}

/// 一次完整运行的结果
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// 记录已输出
    Succeeded {
        record: ProductRecord,
        file_name: String,
        attempts: u32,
    },
    /// 没有任何尝试满足条件，未输出文档
    Exhausted { attempts: u32 },
}

/// 调度错误类型
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 序列化失败
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    /// 输出失败
    #[error("Emit failed: {0}")]
    Emit(#[from] SinkError),
    /// 调度器已处于终止状态
    #[error("Scheduler already finished in state {0:?}")]
    AlreadyFinished(SchedulerState),
}

/// 重试调度器
///
/// 按固定间隔对页面采样并提取，直到记录满足输出条件或尝试次数耗尽。
/// 进入终止状态后不再进行任何提取，`run` 会消耗调度器，因此无法重启。
pub struct RetryScheduler<S: SnapshotSource> {
    /// 快照来源
    source: S,
    /// 页面提取服务
    extractor: ExtractionService,
    /// 轮询策略
    policy: RetryPolicy,
    state: SchedulerState,
    attempts: u32,
}

impl<S: SnapshotSource> RetryScheduler<S> {
    /// 创建新的调度器实例
    ///
    /// # 参数
    ///
    /// * `source` - 快照来源
    /// * `extractor` - 页面提取服务
    /// * `policy` - 轮询间隔与尝试次数
    pub fn new(source: S, extractor: ExtractionService, policy: RetryPolicy) -> Self {
        Self {
            source,
            extractor,
            policy,
            state: SchedulerState::Polling,
            attempts: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// 已进行的尝试次数
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 执行一个周期
    ///
    /// 同步完成一次采样与提取并推进状态机。终止后调用只返回 `Idle`。
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.is_terminal() {
            return TickOutcome::Idle;
        }

        self.attempts += 1;
        let attempt = self.attempts;

        let record = match self.source.capture() {
            Ok(snapshot) => self.extractor.extract(&snapshot).ok(),
            Err(e) => {
                warn!(attempt, error = %e, "Snapshot capture failed");
                None
            }
        };

        match record {
            Some(record) if record.is_complete() => {
                self.state = SchedulerState::Succeeded;
                TickOutcome::Succeeded(record)
            }
            _ if !self.policy.should_retry(attempt) => {
                self.state = SchedulerState::Exhausted;
                TickOutcome::Exhausted { attempts: attempt }
            }
            _ => {
                debug!(attempt, max_attempts = self.policy.max_attempts, "Product not ready yet");
                TickOutcome::Pending { attempt }
            }
        }
    }

    /// 运行调度器直到终止
    ///
    /// 第一次尝试在启动一个间隔后进行。成功时把记录序列化并交给 `sink`，
    /// 耗尽时不输出任何内容。
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeOutcome)` - 成功或耗尽
    /// * `Err(ScrapeError)` - 序列化或输出失败
    pub async fn run<K>(mut self, sink: &K) -> Result<ScrapeOutcome, ScrapeError>
    where
        K: DocumentSink + ?Sized,
    {
        if self.state.is_terminal() {
            return Err(ScrapeError::AlreadyFinished(self.state));
        }

        let cadence = self.policy.cadence;
        let mut ticker = interval_at(Instant::now() + cadence, cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match self.tick() {
                TickOutcome::Pending { .. } => continue,
                TickOutcome::Succeeded(record) => {
                    let file_name = record.file_name();
                    let content = record.to_document()?;
                    sink.emit(&file_name, &content).await?;
                    info!(
                        file_name = %file_name,
                        attempts = self.attempts,
                        "Product document emitted"
                    );
                    return Ok(ScrapeOutcome::Succeeded {
                        record,
                        file_name,
                        attempts: self.attempts,
                    });
                }
                TickOutcome::Exhausted { attempts } => {
                    warn!(attempts, "No valid product information found, giving up");
                    return Ok(ScrapeOutcome::Exhausted { attempts });
                }
                TickOutcome::Idle => return Err(ScrapeError::AlreadyFinished(self.state)),
            }
        }
    }
}
