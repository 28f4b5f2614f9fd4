use std::time::Duration;

use chrono::{DateTime, Timelike, Utc};

use super::Version;
use crate::config::ConfigError;

/// Width of a version window in seconds, `1..=60`.
///
/// Truncation happens within the minute: seconds-of-minute are rounded down
/// to a multiple of the width. A width that does not divide 60 leaves a
/// shorter final window before the minute boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Granularity(u32);

impl Granularity {
    pub const DEFAULT_SECONDS: u32 = 15;

    pub fn new(seconds: u32) -> Result<Self, ConfigError> {
        if (1..=60).contains(&seconds) {
            Ok(Granularity(seconds))
        } else {
            Err(ConfigError::InvalidGranularity(seconds))
        }
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// Round a version down to the start of its window.
    pub fn truncate(&self, version: Version) -> Version {
        let secs = version.unix_seconds();
        let second_of_minute = secs.rem_euclid(60);
        Version::from_unix_seconds(secs - second_of_minute % i64::from(self.0))
    }

    /// Time left until the window containing `now` rolls over.
    pub fn until_next_window(&self, now: DateTime<Utc>) -> Duration {
        let second = now.second().min(59);
        let offset = second % self.0;
        let whole = (self.0 - offset).min(60 - second);
        Duration::from_secs(u64::from(whole))
            .saturating_sub(Duration::from_nanos(u64::from(now.nanosecond() % 1_000_000_000)))
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity(Self::DEFAULT_SECONDS)
    }
}
