// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use coupang_scraper::config::settings::SelectorSettings;
use coupang_scraper::domain::services::extraction_service::{ExtractError, ExtractionService};
use coupang_scraper::engines::html_snapshot::HtmlSnapshot;

const URL: &str = "https://www.coupang.com/vp/products/1384804?itemId=2371&vendorItemId=7000";

fn fixture() -> String {
    std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/product_page.html"
    ))
    .unwrap()
}

#[test]
fn test_extract_rendered_product_page() {
    let snapshot = HtmlSnapshot::parse(URL, &fixture());
    let record = ExtractionService::default().extract(&snapshot).unwrap();

    assert_eq!(record.identifier, "1384804");
    assert_eq!(record.title, "로지텍 무선 마우스 M185");
    assert_eq!(
        record.image_url,
        "https://thumbnail10.coupangcdn.com/thumbnails/remote/292x292ex/image/retail/images/m185.jpg"
    );
    assert_eq!(
        record.categories,
        vec!["가전디지털", "컴퓨터/게임/SW", "마우스"]
    );
    assert_eq!(record.star_rating, 4.8);
    assert_eq!(record.review_count, 12345);
    assert_eq!(record.original_price, 19900);
    assert_eq!(record.final_price, 15900);
    assert!(record.is_complete());
}

#[test]
fn test_each_attempt_builds_a_fresh_record() {
    let service = ExtractionService::default();
    let first = service
        .extract(&HtmlSnapshot::parse(URL, &fixture()))
        .unwrap();
    let second = service
        .extract(&HtmlSnapshot::parse(URL, "<html></html>"))
        .unwrap();

    assert_eq!(first.final_price, 15900);
    assert_eq!(second.final_price, 0);
    assert_eq!(second.title, "N/A");
}

#[test]
fn test_custom_selectors() {
    let html = r#"
        <h2 class="name">Desk Lamp</h2>
        <span class="now">₩41,000</span>
    "#;
    let selectors = SelectorSettings {
        title: "h2.name".to_string(),
        final_price: "span.now".to_string(),
        ..SelectorSettings::default()
    };
    let record = ExtractionService::new(selectors)
        .extract(&HtmlSnapshot::parse(URL, html))
        .unwrap();

    assert_eq!(record.title, "Desk Lamp");
    assert_eq!(record.final_price, 41000);
}

#[test]
fn test_structural_error_returns_no_partial_record() {
    let selectors = SelectorSettings {
        final_price: "div..broken".to_string(),
        ..SelectorSettings::default()
    };
    let result = ExtractionService::new(selectors).extract(&HtmlSnapshot::parse(URL, &fixture()));
    assert!(matches!(result, Err(ExtractError::Dom(_))));
}
