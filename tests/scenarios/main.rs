//! Scenario harness integration tests.
//!
//! Runs validation scenarios and probes against an in-process target.

mod support;
mod protocol;
mod suite;
