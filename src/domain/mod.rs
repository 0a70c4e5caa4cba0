// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：商品记录
/// - 仓库接口（repositories）：文档输出抽象接口
/// - 服务（services）：字段规范化与页面提取
///
/// 领域层不依赖于任何具体的页面或存储实现。
pub mod models;
pub mod repositories;
pub mod services;
