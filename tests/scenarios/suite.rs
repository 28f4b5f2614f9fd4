use std::sync::Arc;

use validation_server::config::ServerConfig;
use validation_server::harness::{Check, Scenario, Suite, Validator};
use validation_server::ModifiedSince;

use crate::support::{fast_target, frozen_clock, one_second_server, realtime_target, start_server, system_clock};

#[tokio::test]
async fn failing_check_does_not_abort_siblings() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = Arc::new(fast_target(&base));

    let report = Suite::new()
        .check(
            "wrongly_expects_gone",
            Check::Gone {
                path: "/etag/present/".into(),
            },
        )
        .check("static_etags", Scenario::new("/static/etag/functest/", Validator::ETag))
        .run(target)
        .await;

    assert_eq!(report.checks.len(), 2);
    assert!(!report.all_passed());

    let failed = report.get("wrongly_expects_gone").unwrap();
    assert!(!failed.passed);
    assert!(failed.error.as_deref().unwrap().contains("expected status 410"));

    let passed = report.get("static_etags").unwrap();
    assert!(passed.passed);
    assert_eq!(passed.error, None);
}

#[tokio::test]
async fn standard_suite_passes_with_match_rule() {
    let config = one_second_server().with_modified_since(ModifiedSince::Match);
    let base = start_server(config, system_clock()).await;
    let target = Arc::new(realtime_target(&base));

    let report = Suite::standard().run(target).await;
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "failed checks: {:?}", failures);
}

#[tokio::test]
async fn standard_suite_against_reference_rule_fails_only_date_scenarios() {
    let base = start_server(one_second_server(), system_clock()).await;
    let target = Arc::new(realtime_target(&base));

    let report = Suite::standard().run(target).await;
    let mut failed: Vec<&str> = report.failures().map(|c| c.name.as_str()).collect();
    failed.sort_unstable();
    assert_eq!(failed, vec!["clock_modded", "periodic_modded", "static_modded"]);
}
