// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use crate::config::settings::PollingSettings;

/// 重试策略配置
///
/// 固定间隔、有限次数的轮询策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 每次尝试之间的固定间隔
    pub cadence: Duration,
    /// 最大尝试次数（至少为 1）
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            cadence: Duration::from_secs(1),
            max_attempts: 10,
        }
    }
}

impl RetryPolicy {
    /// 创建重试策略，尝试次数至少为 1
    pub fn new(cadence: Duration, max_attempts: u32) -> Self {
        Self {
            cadence,
            max_attempts: max_attempts.max(1),
        }
    }

    /// 从轮询配置创建
    pub fn from_settings(settings: &PollingSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.cadence_ms),
            settings.max_attempts,
        )
    }

    /// 已完成 `attempts` 次尝试后是否还能继续
    pub fn should_retry(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }

    /// 整个预算耗尽所需的最长时间
    pub fn total_budget(&self) -> Duration {
        self.cadence.saturating_mul(self.max_attempts)
    }
}
