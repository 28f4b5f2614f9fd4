use http::{Method, StatusCode};

use super::error::ScenarioError;
use super::target::Target;

/// How a scenario makes the resource change between its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Updater {
    /// Wait one tick, then PUT the resource and require 204.
    Explicit,
    /// Send nothing; wait a full granularity window so the clock rolls over.
    Passive,
}

impl Updater {
    pub fn name(&self) -> &'static str {
        match self {
            Updater::Explicit => "explicit",
            Updater::Passive => "passive",
        }
    }

    /// Advance the resource at `path`. Returns once the mutation has
    /// logically happened.
    pub async fn apply(&self, target: &Target, path: &str) -> Result<(), ScenarioError> {
        let config = target.config();
        match self {
            Updater::Explicit => {
                // The pause keeps the PUT clear of the previous response's second.
                tokio::time::sleep(config.tick).await;
                let put = target.request(Method::PUT, path)?;
                target.exchange("mutating", &put, StatusCode::NO_CONTENT).await?;
            }
            Updater::Passive => {
                tokio::time::sleep(config.granularity.as_duration()).await;
            }
        }
        Ok(())
    }
}
