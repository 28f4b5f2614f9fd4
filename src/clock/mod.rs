//! Version clock: maps wall-clock time onto resource versions.
//!
//! A non-static resource's version is the current time with its
//! seconds-of-minute truncated down to a multiple of the configured
//! [`Granularity`]. Every request inside one window therefore sees the same
//! version, and the version advances as soon as the window rolls over.
//! Static resources are pinned to [`Version::STATIC`].
//!
//! ## Example
//!
//! ```ignore
//! use validation_server::clock::{current_version, Granularity};
//!
//! let g = Granularity::new(15)?;
//! let v = current_version(chrono::Utc::now(), g, false);
//! println!("{}", v.etag());
//! ```

mod granularity;
mod source;
mod version;

pub use granularity::Granularity;
pub use source::{Clock, ManualClock, SystemClock};
pub use version::Version;

use chrono::{DateTime, Utc};

/// Compute the version a resource has at `now`.
///
/// Pure function of its inputs: static resources always get the sentinel,
/// everything else gets `now` truncated to the start of its window.
pub fn current_version(now: DateTime<Utc>, granularity: Granularity, is_static: bool) -> Version {
    if is_static {
        return Version::STATIC;
    }
    granularity.truncate(Version::from_datetime(now))
}
