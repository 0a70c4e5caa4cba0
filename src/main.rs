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

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use coupang_scraper::config::settings::Settings;
use coupang_scraper::domain::services::extraction_service::ExtractionService;
use coupang_scraper::engines::snapshot_sources::FileSnapshotSource;
use coupang_scraper::infrastructure::storage::DirectorySink;
use coupang_scraper::queue::scheduler::{RetryScheduler, ScrapeOutcome};
use coupang_scraper::utils::retry_policy::RetryPolicy;
use coupang_scraper::utils::telemetry;
use tracing::{error, info};

/// 从渲染后的商品页面提取商品信息并保存为JSON
#[derive(Debug, Parser)]
#[command(name = "coupang-scraper", version)]
struct Cli {
    /// 渲染后的页面HTML文件，每个周期重新读取
    html_file: PathBuf,

    /// 页面的绝对URL
    #[arg(long)]
    url: String,

    /// 输出目录
    #[arg(long)]
    out: Option<PathBuf>,

    /// 轮询间隔（毫秒）
    #[arg(long)]
    cadence_ms: Option<u64>,

    /// 最大尝试次数
    #[arg(long)]
    max_attempts: Option<u32>,
}

/// 主函数
///
/// 加载配置，轮询页面快照，成功时把商品文档写入输出目录
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Extraction aborted");
    }

    Ok(())
}

/// 执行一次完整的提取
///
/// 输入或配置无效时返回错误，由 `main` 记录日志
async fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.url.starts_with("http") {
        bail!("Invalid URL (must start with http/https): {}", cli.url);
    }

    // 2. Load configuration, CLI flags take precedence
    let mut settings = Settings::new()?;
    if let Some(out) = &cli.out {
        settings.storage.local_path = out.to_string_lossy().into_owned();
    }
    if let Some(cadence_ms) = cli.cadence_ms {
        settings.polling.cadence_ms = cadence_ms;
    }
    if let Some(max_attempts) = cli.max_attempts {
        settings.polling.max_attempts = max_attempts;
    }
    settings.validate()?;
    info!(
        cadence_ms = settings.polling.cadence_ms,
        max_attempts = settings.polling.max_attempts,
        "Configuration loaded"
    );

    // 3. Initialize components
    let source = FileSnapshotSource::new(&cli.html_file, cli.url.clone());
    let extractor = ExtractionService::new(settings.selectors.clone());
    let policy = RetryPolicy::from_settings(&settings.polling);
    let sink = DirectorySink::from_settings(&settings.storage);

    // 4. Poll until the product is rendered or the budget runs out
    info!(url = %cli.url, file = %cli.html_file.display(), "Starting extraction");
    let scheduler = RetryScheduler::new(source, extractor, policy);
    match scheduler.run(&sink).await {
        Ok(ScrapeOutcome::Succeeded { file_name, .. }) => {
            println!("{}", sink.full_path(&file_name).display());
        }
        Ok(ScrapeOutcome::Exhausted { attempts }) => {
            info!(
                attempts,
                waited = ?policy.total_budget(),
                "No document emitted"
            );
        }
        Err(e) => {
            error!(error = %e, "Failed to emit product document");
        }
    }

    Ok(())
}
