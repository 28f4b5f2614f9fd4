use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::check::Check;
use super::scenario::Scenario;
use super::target::Target;
use super::updater::Updater;
use super::validator::Validator;

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    pub path: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// Results of a whole suite, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub checks: Vec<CheckReport>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckReport> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn get(&self, name: &str) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// A named set of checks run concurrently against one target.
///
/// Every check runs as its own task; a failing check never stops its
/// siblings. Checks must use distinct paths, since the target keeps one
/// state per path.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    checks: Vec<(String, Check)>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check. Returns `self` for chaining.
    pub fn check(mut self, name: &str, check: impl Into<Check>) -> Self {
        self.checks.push((name.to_string(), check.into()));
        self
    }

    /// The reference suite: missing and read-only documents, then every
    /// validator against static, periodically rolling and explicitly
    /// mutated resources.
    pub fn standard() -> Self {
        Self::new()
            .check(
                "basic_missing_doc",
                Check::Gone {
                    path: "/gosomewhere/notexpected/".into(),
                },
            )
            .check(
                "method_not_allowed",
                Check::MethodNotAllowed {
                    path: "/etag/readonly/".into(),
                },
            )
            .check(
                "static_doc",
                Check::StableContent {
                    path: "/static/ourtestdoc/".into(),
                },
            )
            .check("static_etags", Scenario::new("/static/etag/functest/", Validator::ETag))
            .check(
                "static_modded",
                Scenario::new("/static/lastmod/functest/", Validator::LastModified),
            )
            .check(
                "periodic_etags",
                Scenario::new("/periodic/etag/functest/", Validator::ETag)
                    .with_updater(Updater::Passive),
            )
            .check(
                "periodic_modded",
                Scenario::new("/periodic/lastmod/functest/", Validator::LastModified)
                    .with_updater(Updater::Passive),
            )
            .check(
                "clock_etags",
                Scenario::new("/clock/etag/functest/", Validator::ETag)
                    .with_updater(Updater::Explicit),
            )
            .check(
                "clock_modded",
                Scenario::new("/clock/lastmod/functest/", Validator::LastModified)
                    .with_updater(Updater::Explicit),
            )
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.checks.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Run every check concurrently and collect the results.
    pub async fn run(self, target: Arc<Target>) -> SuiteReport {
        let mut handles = Vec::with_capacity(self.checks.len());
        for (name, check) in self.checks {
            let target = target.clone();
            let path = check.path().to_string();
            let task_name = name.clone();
            let handle = tokio::spawn(async move {
                let started = Instant::now();
                let result = check.run(&target).await;
                if let Err(e) = &result {
                    tracing::warn!(check = %task_name, error = %e, "check failed");
                }
                (result.map_err(|e| e.to_string()), started.elapsed())
            });
            handles.push((name, path, handle));
        }

        let mut report = SuiteReport::default();
        for (name, path, handle) in handles {
            let (result, elapsed) = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => (Err(format!("check task failed: {}", e)), Default::default()),
            };
            report.checks.push(CheckReport {
                name,
                path,
                passed: result.is_ok(),
                error: result.err(),
                elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            });
        }
        report
    }
}
