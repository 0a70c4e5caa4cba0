// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use coupang_scraper::config::settings::Settings;
use coupang_scraper::utils::retry_policy::RetryPolicy;
use std::time::Duration;

#[test]
fn test_config_loading_from_default_toml() {
    let settings = Settings::new().expect("configuration should load");

    assert!(settings.polling.cadence_ms > 0);
    assert!(settings.polling.max_attempts >= 1);
    assert_eq!(settings.selectors.breadcrumb, "ul.breadcrumb li");
    assert_eq!(settings.selectors.rating, "span.rating-star-num");
    assert!(!settings.storage.local_path.is_empty());
}

#[test]
fn test_policy_from_default_settings() {
    let settings = Settings::defaults().unwrap();
    let policy = RetryPolicy::from_settings(&settings.polling);
    assert_eq!(policy.cadence, Duration::from_secs(1));
    assert_eq!(policy.max_attempts, 10);
}
