// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含轮询、选择器和存储等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 轮询配置
    pub polling: PollingSettings,
    /// 页面选择器配置
    pub selectors: SelectorSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 轮询配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PollingSettings {
    /// 两次提取尝试之间的间隔（毫秒）
    pub cadence_ms: u64,
    /// 最大提取尝试次数
    pub max_attempts: u32,
}

/// 页面选择器配置设置
///
/// 每个字段对应商品页面上的一个CSS选择器
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorSettings {
    /// 商品标题
    pub title: String,
    /// 商品主图
    pub image: String,
    /// 面包屑分类项
    pub breadcrumb: String,
    /// 星级评分（读取 style 属性）
    pub rating: String,
    /// 评论数
    pub review_count: String,
    /// 原价
    pub original_price: String,
    /// 最终售价
    pub final_price: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            title: "h1.product-title".to_string(),
            image: "div.product-image img".to_string(),
            breadcrumb: "ul.breadcrumb li".to_string(),
            rating: "span.rating-star-num".to_string(),
            review_count: "span.rating-count-txt".to_string(),
            original_price: "div.price-amount.sales-price-amount".to_string(),
            final_price: "div.price-amount.final-price-amount".to_string(),
        }
    }
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 输出文档目录
    pub local_path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `COUPANG__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或取值无效
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("COUPANG").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 仅使用内置默认值
    pub fn defaults() -> Result<Self, ConfigError> {
        let settings: Settings = Self::with_defaults(Config::builder())?
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let selectors = SelectorSettings::default();
        builder
            // Polling defaults
            .set_default("polling.cadence_ms", 1000)?
            .set_default("polling.max_attempts", 10)?
            // Selector defaults
            .set_default("selectors.title", selectors.title)?
            .set_default("selectors.image", selectors.image)?
            .set_default("selectors.breadcrumb", selectors.breadcrumb)?
            .set_default("selectors.rating", selectors.rating)?
            .set_default("selectors.review_count", selectors.review_count)?
            .set_default("selectors.original_price", selectors.original_price)?
            .set_default("selectors.final_price", selectors.final_price)?
            // Storage defaults
            .set_default("storage.local_path", "./downloads")
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.cadence_ms == 0 {
            return Err(ConfigError::Message(
                "polling.cadence_ms must be greater than 0".to_string(),
            ));
        }
        if self.polling.max_attempts == 0 {
            return Err(ConfigError::Message(
                "polling.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
