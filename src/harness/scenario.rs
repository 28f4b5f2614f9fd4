use std::fmt;
use std::time::Duration;

use http::{Method, StatusCode};

use super::compare::compare_bodies;
use super::error::ScenarioError;
use super::target::Target;
use super::updater::Updater;
use super::validator::Validator;

/// Margin past a window boundary before an aligned scenario starts.
const ALIGN_SKEW: Duration = Duration::from_millis(50);

/// Steps of the validation protocol, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Unconditional GET; captures body and validator.
    Baseline,
    /// Derived requests against the unchanged resource.
    Validating,
    /// The updater advances the resource.
    Mutating,
    /// Derived requests replayed against the changed resource.
    Revalidating,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Baseline => "baseline",
            Phase::Validating => "validating",
            Phase::Mutating => "mutating",
            Phase::Revalidating => "revalidating",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// One end-to-end conditional validation test against a live target.
///
/// Without an updater the scenario stops after [`Phase::Validating`] and
/// only proves the unchanged resource validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub path: String,
    pub validator: Validator,
    pub updater: Option<Updater>,
}

impl Scenario {
    pub fn new(path: impl Into<String>, validator: Validator) -> Self {
        Self {
            path: path.into(),
            validator,
            updater: None,
        }
    }

    pub fn with_updater(mut self, updater: Updater) -> Self {
        self.updater = Some(updater);
        self
    }

    /// Run the protocol. Returns the last phase completed, which is
    /// [`Phase::Validating`] for read-only scenarios and [`Phase::Done`]
    /// otherwise.
    pub async fn run(&self, target: &Target) -> Result<Phase, ScenarioError> {
        let config = target.config();
        if config.align_start {
            let wait = config.granularity.until_next_window(chrono::Utc::now()) + ALIGN_SKEW;
            let wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX);
            tracing::debug!(path = %self.path, wait_ms, "aligning to window start");
            tokio::time::sleep(wait).await;
        }

        self.enter(Phase::Baseline);
        let request = target.request(Method::GET, &self.path)?;
        let baseline = target.exchange("baseline", &request, StatusCode::OK).await?;

        self.enter(Phase::Validating);
        let derived = self.validator.build(target, &baseline)?;
        let same = target
            .exchange("validating (same)", &derived.same, StatusCode::OK)
            .await?;
        compare_bodies("validating (same)", &baseline.body, &same.body, true, true)?;
        target
            .exchange("validating (modified)", &derived.modified, StatusCode::NOT_MODIFIED)
            .await?;

        let Some(updater) = self.updater else {
            return Ok(Phase::Validating);
        };

        self.enter(Phase::Mutating);
        updater.apply(target, &self.path).await?;

        self.enter(Phase::Revalidating);
        let modified = target
            .exchange("revalidating (modified)", &derived.modified, StatusCode::OK)
            .await?;
        compare_bodies("revalidating (modified)", &baseline.body, &modified.body, false, false)?;
        target
            .exchange("revalidating (same)", &derived.same, StatusCode::PRECONDITION_FAILED)
            .await?;

        self.enter(Phase::Done);
        Ok(Phase::Done)
    }

    fn enter(&self, phase: Phase) {
        tracing::info!(
            path = %self.path,
            validator = self.validator.name(),
            updater = self.updater.map(|u| u.name()).unwrap_or("none"),
            %phase,
            "scenario phase"
        );
    }
}
