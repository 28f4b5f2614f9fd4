use validation_server::config::ServerConfig;
use validation_server::harness::{BodyCheck, Check, Phase, Scenario, ScenarioError, Updater, Validator};
use validation_server::ModifiedSince;

use crate::support::{
    fast_target, frozen_clock, one_second_server, realtime_target, start_server, system_clock,
};

#[tokio::test]
async fn static_etag_validates_without_updater() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    let phase = Scenario::new("/static/etag/functest/", Validator::ETag)
        .run(&target)
        .await
        .unwrap();
    assert_eq!(phase, Phase::Validating);
}

#[tokio::test]
async fn explicit_mutation_with_etag() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    let phase = Scenario::new("/clock/etag/functest/", Validator::ETag)
        .with_updater(Updater::Explicit)
        .run(&target)
        .await
        .unwrap();
    assert_eq!(phase, Phase::Done);
}

#[tokio::test]
async fn explicit_mutation_with_last_modified() {
    let config = ServerConfig::default().with_modified_since(ModifiedSince::Match);
    let base = start_server(config, frozen_clock()).await;
    let target = fast_target(&base);

    let phase = Scenario::new("/clock/lastmod/functest/", Validator::LastModified)
        .with_updater(Updater::Explicit)
        .run(&target)
        .await
        .unwrap();
    assert_eq!(phase, Phase::Done);
}

#[tokio::test]
async fn passive_mutation_rolls_over_with_the_clock() {
    let base = start_server(one_second_server(), system_clock()).await;
    let target = realtime_target(&base);

    let phase = Scenario::new("/periodic/etag/functest/", Validator::ETag)
        .with_updater(Updater::Passive)
        .run(&target)
        .await
        .unwrap();
    assert_eq!(phase, Phase::Done);
}

#[tokio::test]
async fn reference_rule_fails_last_modified_validation() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    let err = Scenario::new("/static/lastmod/functest/", Validator::LastModified)
        .run(&target)
        .await
        .unwrap_err();
    match err {
        ScenarioError::UnexpectedStatus {
            during,
            expected,
            actual,
            ..
        } => {
            assert_eq!(during, "validating (modified)");
            assert_eq!(expected, 304);
            assert_eq!(actual, 200);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn missing_validator_header_is_fatal() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    let err = Scenario::new("/static/novalidators/", Validator::ETag)
        .run(&target)
        .await
        .unwrap_err();
    assert!(matches!(err, ScenarioError::MissingValidator { ref header } if header == "etag"));
}

#[tokio::test]
async fn explicit_updater_on_read_only_path_fails_in_mutation() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    let err = Scenario::new("/periodic/etag/readonly/", Validator::ETag)
        .with_updater(Updater::Explicit)
        .run(&target)
        .await
        .unwrap_err();
    match err {
        ScenarioError::UnexpectedStatus { during, actual, .. } => {
            assert_eq!(during, "mutating");
            assert_eq!(actual, 405);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn passive_updater_on_frozen_clock_never_changes() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let config = validation_server::config::HarnessConfig::default()
        .with_target(&base)
        .unwrap()
        .with_granularity(validation_server::Granularity::new(1).unwrap());
    let target = validation_server::harness::Target::new(config);

    let err = Scenario::new("/periodic/etag/frozen/", Validator::ETag)
        .with_updater(Updater::Passive)
        .run(&target)
        .await
        .unwrap_err();
    match err {
        ScenarioError::UnexpectedStatus {
            during,
            expected,
            actual,
            ..
        } => {
            assert_eq!(during, "revalidating (modified)");
            assert_eq!(expected, 200);
            assert_eq!(actual, 304);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn stable_content_probe_needs_a_new_generation_line() {
    // A frozen clock renders the same generation line twice.
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    let err = Check::StableContent {
        path: "/static/ourtestdoc/".into(),
    }
    .run(&target)
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::BodyMismatch {
            check: BodyCheck::BodiesIdentical,
            ..
        }
    ));
}

#[tokio::test]
async fn probes_against_reference_target() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let target = fast_target(&base);

    Check::Gone {
        path: "/nope/".into(),
    }
    .run(&target)
    .await
    .unwrap();
    Check::MethodNotAllowed {
        path: "/etag/x/".into(),
    }
    .run(&target)
    .await
    .unwrap();
}

#[tokio::test]
async fn refused_connection_ends_scenario_at_baseline() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let target = fast_target(&format!("http://{addr}"));

    let started = std::time::Instant::now();
    let err = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        Scenario::new("/clock/etag/functest/", Validator::ETag)
            .with_updater(Updater::Explicit)
            .run(&target),
    )
    .await
    .expect("scenario should fail fast on a refused connection")
    .unwrap_err();

    match err {
        ScenarioError::Transport { during, source } => {
            assert_eq!(during, "baseline");
            assert!(source.is_connect());
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}
