//! Target server integration tests.
//!
//! Starts the axum server on an ephemeral port and exercises it with reqwest.

mod routing;
