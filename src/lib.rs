//! HTTP conditional-request validation.
//!
//! Two halves built on one version model:
//!
//! - [`server`]: a target server exposing one mutable document per path,
//!   versioned by a time bucket ([`clock`]) or by explicit PUT mutation, and
//!   answering `If-Match` / `If-None-Match` / `If-Modified-Since` /
//!   `If-Unmodified-Since` through the pure decision engine in
//!   [`conditional`].
//! - [`harness`]: a scenario runner that drives any target through
//!   baseline, validation, mutation and revalidation, failing on the first
//!   unexpected status or body.

pub mod clock;
pub mod conditional;
pub mod config;
#[cfg(feature = "harness")]
pub mod harness;
pub mod resource;
pub mod server;
pub mod telemetry;

pub use clock::{current_version, Clock, Granularity, ManualClock, SystemClock, Version};
pub use conditional::{evaluate, evaluate_with, Channels, ModifiedSince, Outcome, Preconditions};
pub use config::{ConfigError, HarnessConfig, ServerConfig};
pub use resource::{PathFlags, ResourceState, ResourceStore};
pub use server::{ServerError, TargetServer};

#[cfg(feature = "harness")]
pub use harness::{Check, Scenario, ScenarioError, Suite, SuiteReport, Target, Updater, Validator};
