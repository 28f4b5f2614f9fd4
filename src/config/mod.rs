//! Configuration for the target server and the scenario harness.
//!
//! Nothing here is process-wide: every component takes the config it needs
//! as an argument, so the decision engine and the harness can be exercised
//! without a live network.

mod error;

pub use error::ConfigError;

use std::time::Duration;

use http::Uri;

use crate::clock::Granularity;
use crate::conditional::ModifiedSince;

/// Default listen address of the target server.
pub const DEFAULT_ADDR: &str = "127.0.0.1:20752";

/// Default target the harness talks to.
pub const DEFAULT_TARGET: &str = "http://localhost:20752";

/// Target server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub granularity: Granularity,
    /// Which side of the `If-Modified-Since` comparison answers 304.
    pub modified_since: ModifiedSince,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            granularity: Granularity::default(),
            modified_since: ModifiedSince::default(),
        }
    }
}

impl ServerConfig {
    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_modified_since(mut self, rule: ModifiedSince) -> Self {
        self.modified_since = rule;
        self
    }
}

/// Scenario harness settings.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base URL of the server under test, without a trailing slash.
    pub target: String,
    /// Window width the target was started with.
    pub granularity: Granularity,
    /// One clock tick: the pause before an explicit mutation and between
    /// the two fetches of a stable-content probe.
    pub tick: Duration,
    /// Wait for the next window to start before each baseline fetch.
    pub align_start: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            granularity: Granularity::default(),
            tick: Duration::from_secs(1),
            align_start: false,
        }
    }
}

impl HarnessConfig {
    /// Point the harness at `target`, which must be an absolute `http://` or
    /// `https://` URL.
    pub fn with_target(mut self, target: &str) -> Result<Self, ConfigError> {
        let uri: Uri = target
            .parse()
            .map_err(|_| ConfigError::InvalidTarget(target.to_string()))?;
        let scheme_ok = uri.scheme_str().is_some_and(|s| s == "http" || s == "https");
        if !scheme_ok || uri.authority().is_none() {
            return Err(ConfigError::InvalidTarget(target.to_string()));
        }
        self.target = target.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_align_start(mut self, align_start: bool) -> Self {
        self.align_start = align_start;
        self
    }

    /// Absolute URL for a resource path on the target.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.target, path)
    }
}
