//! Error types for configuration.

use std::fmt;

/// Error type for building server or harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Granularity outside `1..=60` seconds.
    InvalidGranularity(u32),
    /// Target is not an absolute `http(s)://host[:port]` URL.
    InvalidTarget(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGranularity(secs) => {
                write!(f, "granularity must be between 1 and 60 seconds, got {}", secs)
            }
            ConfigError::InvalidTarget(target) => write!(f, "invalid target url: {}", target),
        }
    }
}

impl std::error::Error for ConfigError {}
