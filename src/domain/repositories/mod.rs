// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的输出接口，具体实现由基础设施层提供。
/// - 文档输出（document_sink）：把生成的文档交给宿主环境
pub mod document_sink;
