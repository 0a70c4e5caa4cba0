// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// - 存储（storage）：文档输出的目录与内存实现
pub mod storage;
