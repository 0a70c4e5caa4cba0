// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use coupang_scraper::domain::services::extraction_service::ExtractionService;
use coupang_scraper::engines::snapshot_sources::FileSnapshotSource;
use coupang_scraper::infrastructure::storage::DirectorySink;
use coupang_scraper::domain::repositories::document_sink::SinkError;
use coupang_scraper::queue::scheduler::{RetryScheduler, ScrapeError, ScrapeOutcome};
use coupang_scraper::utils::retry_policy::RetryPolicy;
use serde_json::Value;

const URL: &str = "https://www.coupang.com/vp/products/8812?itemId=1";

const WIDGET_PAGE: &str = r#"
    <html>
        <body>
            <h1 class="product-title">Widget</h1>
            <div class="price-amount final-price-amount">₩9,900</div>
        </body>
    </html>
"#;

const LOADING_PAGE: &str = r#"<html><body><div class="spinner"></div></body></html>"#;

fn policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(Duration::from_millis(100), max_attempts)
}

#[tokio::test(start_paused = true)]
async fn test_widget_page_is_emitted() {
    // Given: 已渲染标题和售价、没有评分的页面
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    std::fs::write(&page, WIDGET_PAGE).unwrap();
    let sink = DirectorySink::new(dir.path().join("downloads"));

    // When
    let scheduler = RetryScheduler::new(
        FileSnapshotSource::new(&page, URL),
        ExtractionService::default(),
        policy(5),
    );
    let outcome = scheduler.run(&sink).await.unwrap();

    // Then
    let file_name = match outcome {
        ScrapeOutcome::Succeeded {
            record,
            file_name,
            attempts,
        } => {
            assert_eq!(attempts, 1);
            assert_eq!(record.title, "Widget");
            assert_eq!(record.final_price, 9900);
            assert_eq!(record.star_rating, 0.0);
            file_name
        }
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(file_name, "coupang_8812.json");

    let raw = std::fs::read_to_string(sink.full_path(&file_name)).unwrap();
    assert!(raw.contains("\n    \"title\": \"Widget\","));
    let document: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["identifier"], "8812");
    assert_eq!(document["finalPrice"], 9900);
    assert_eq!(document["originalPrice"], 0);
    assert_eq!(document["starRating"], 0.0);
    assert_eq!(document["url"], URL);
    assert_eq!(document.as_object().unwrap().len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_page_that_never_renders_is_not_emitted() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    std::fs::write(&page, LOADING_PAGE).unwrap();
    let out = dir.path().join("downloads");
    let sink = DirectorySink::new(&out);

    let scheduler = RetryScheduler::new(
        FileSnapshotSource::new(&page, URL),
        ExtractionService::default(),
        policy(3),
    );
    let outcome = scheduler.run(&sink).await.unwrap();

    assert!(matches!(outcome, ScrapeOutcome::Exhausted { attempts: 3 }));
    assert!(!out.exists());
}

#[tokio::test(start_paused = true)]
async fn test_page_rendered_while_polling() {
    // Given: 页面在第二次和第三次采样之间完成渲染
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    std::fs::write(&page, LOADING_PAGE).unwrap();
    let sink = DirectorySink::new(dir.path());

    let renderer_page = page.clone();
    let renderer = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        std::fs::write(&renderer_page, WIDGET_PAGE).unwrap();
    });

    let scheduler = RetryScheduler::new(
        FileSnapshotSource::new(&page, URL),
        ExtractionService::default(),
        policy(10),
    );
    let outcome = scheduler.run(&sink).await.unwrap();
    renderer.await.unwrap();

    match outcome {
        ScrapeOutcome::Succeeded { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(sink.full_path("coupang_8812.json").exists());
}

#[tokio::test(start_paused = true)]
async fn test_missing_snapshot_file_exhausts() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let scheduler = RetryScheduler::new(
        FileSnapshotSource::new(dir.path().join("absent.html"), URL),
        ExtractionService::default(),
        policy(2),
    );
    let outcome = scheduler.run(&sink).await.unwrap();

    assert!(matches!(outcome, ScrapeOutcome::Exhausted { attempts: 2 }));
}

#[tokio::test(start_paused = true)]
async fn test_identifier_with_path_segments_stays_inside_output_dir() {
    // Given: 商品编号中带有目录分隔符或 `..` 的页面URL
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    std::fs::write(&page, WIDGET_PAGE).unwrap();
    let out = dir.path().join("nested").join("downloads");
    let sink = DirectorySink::new(&out);

    for url in [
        "https://www.coupang.com/vp/products/../../../escaped?x=1",
        "https://www.coupang.com/vp/products/123/reviews?x=1",
    ] {
        // When
        let scheduler = RetryScheduler::new(
            FileSnapshotSource::new(&page, url),
            ExtractionService::default(),
            policy(3),
        );
        let result = scheduler.run(&sink).await;

        // Then: 拒绝输出，不在输出目录之外写文件
        assert!(
            matches!(result, Err(ScrapeError::Emit(SinkError::Other(_)))),
            "{} should not be emitted",
            url
        );
    }

    assert!(!out.exists());
    assert!(!dir.path().join("escaped.json").exists());
    assert!(!dir.path().join("nested").join("escaped.json").exists());
}
