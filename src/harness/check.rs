use http::{Method, StatusCode};

use super::compare::compare_bodies;
use super::error::ScenarioError;
use super::scenario::Scenario;
use super::target::Target;

/// One entry of a suite: a validation scenario or a standalone probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// GET must answer 410.
    Gone { path: String },
    /// PUT must answer 405.
    MethodNotAllowed { path: String },
    /// Two GETs one tick apart: same content date, different bodies.
    StableContent { path: String },
    /// The full validation protocol.
    Validation(Scenario),
}

impl Check {
    pub fn path(&self) -> &str {
        match self {
            Check::Gone { path } | Check::MethodNotAllowed { path } | Check::StableContent { path } => {
                path
            }
            Check::Validation(scenario) => &scenario.path,
        }
    }

    pub async fn run(&self, target: &Target) -> Result<(), ScenarioError> {
        match self {
            Check::Gone { path } => {
                let request = target.request(Method::GET, path)?;
                target.exchange("gone", &request, StatusCode::GONE).await?;
            }
            Check::MethodNotAllowed { path } => {
                let request = target.request(Method::PUT, path)?;
                target
                    .exchange("method not allowed", &request, StatusCode::METHOD_NOT_ALLOWED)
                    .await?;
            }
            Check::StableContent { path } => {
                let request = target.request(Method::GET, path)?;
                let first = target.exchange("first fetch", &request, StatusCode::OK).await?;
                tokio::time::sleep(target.config().tick).await;
                let second = target.exchange("second fetch", &request, StatusCode::OK).await?;
                compare_bodies("second fetch", &first.body, &second.body, true, false)?;
            }
            Check::Validation(scenario) => {
                scenario.run(target).await?;
            }
        }
        Ok(())
    }
}

impl From<Scenario> for Check {
    fn from(scenario: Scenario) -> Self {
        Check::Validation(scenario)
    }
}
