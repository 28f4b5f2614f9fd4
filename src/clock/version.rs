use std::fmt;

use chrono::{DateTime, Utc};

/// ETag rendering of a version, before quoting.
const ETAG_FORMAT: &str = "%Y-%m-%d,%H:%M:%S";

/// IMF-fixdate, the canonical HTTP-date form used for `Last-Modified`.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A resource version: a UTC timestamp at one-second resolution.
///
/// Versions are totally ordered and compare equal iff their truncated
/// timestamps match. Both validator renderings ([`Version::etag`] and
/// [`Version::http_date`]) are derived from this value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(i64);

impl Version {
    /// The pinned version of static resources: 2012-12-20 20:12:12 UTC.
    pub const STATIC: Version = Version(1_356_034_332);

    /// Build a version from a point in time, dropping sub-second precision.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Version(at.timestamp())
    }

    /// Build a version from seconds since the Unix epoch.
    pub fn from_unix_seconds(secs: i64) -> Self {
        Version(secs)
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> i64 {
        self.0
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(self.0, 0).unwrap_or_default()
    }

    /// The version one second later.
    pub fn next(&self) -> Version {
        Version(self.0.saturating_add(1))
    }

    /// Quoted entity tag, e.g. `"2012-12-20,20:12:12"`.
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.as_datetime().format(ETAG_FORMAT))
    }

    /// HTTP-date, e.g. `Thu, 20 Dec 2012 20:12:12 GMT`.
    pub fn http_date(&self) -> String {
        self.as_datetime().format(HTTP_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.http_date())
    }
}
