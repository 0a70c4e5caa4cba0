// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 商品记录（product）：单次提取尝试得到的商品数据
pub mod product;
