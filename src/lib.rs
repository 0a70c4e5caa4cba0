// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含商品记录、字段规范化和页面提取
pub mod domain;

/// 引擎模块
///
/// 页面快照的抽象与基于HTML的实现
pub mod engines;

/// 基础设施模块
///
/// 提供文档输出的具体实现
pub mod infrastructure;

/// 队列模块
///
/// 实现轮询调度功能
pub mod queue;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
