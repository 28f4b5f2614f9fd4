//! Scenario harness: proves a live target honours conditional requests
//! across version changes.
//!
//! A [`Scenario`] walks four phases against one path:
//!
//! 1. **Baseline**: unconditional GET, must be 200; body and validator kept.
//! 2. **Validating**: the [`Validator`] derives a "same" request
//!    (`If-Match` / `If-Unmodified-Since`, must be 200 with an identical
//!    body) and a "modified" request (`If-None-Match` /
//!    `If-Modified-Since`, must be 304).
//! 3. **Mutating**: the [`Updater`] either PUTs the resource after one tick
//!    or waits out a full granularity window. Scenarios without an updater
//!    stop here.
//! 4. **Revalidating**: the same two requests are replayed: "modified" must
//!    now be 200 with a new content date, "same" must be 412.
//!
//! Any deviation ends the scenario with a [`ScenarioError`]. A [`Suite`]
//! runs many scenarios and probes concurrently and reports each one.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use validation_server::config::HarnessConfig;
//! use validation_server::harness::{Suite, Target};
//!
//! let target = Arc::new(Target::new(HarnessConfig::default()));
//! let report = Suite::standard().run(target).await;
//! assert!(report.all_passed());
//! ```

mod check;
mod compare;
mod error;
mod scenario;
mod suite;
mod target;
mod updater;
mod validator;

pub use check::Check;
pub use compare::compare_bodies;
pub use error::{BodyCheck, ScenarioError};
pub use scenario::{Phase, Scenario};
pub use suite::{CheckReport, Suite, SuiteReport};
pub use target::{Captured, Target};
pub use updater::Updater;
pub use validator::{DerivedRequests, Validator};
