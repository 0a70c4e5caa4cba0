// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 提取服务（extraction_service）：从页面快照组装商品记录
/// - 字段规范化（normalizers）：把原始文本转换为类型化字段
pub mod extraction_service;
pub mod normalizers;
