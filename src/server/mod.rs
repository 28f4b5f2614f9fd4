//! The target server: an HTTP front for the conditional validator.
//!
//! Per request the handler composes the version clock, the conditional
//! validator and the resource renderer:
//!
//! ```text
//! clock.now() ─► ResourceStore::resolve ─► conditional::evaluate ─► Reply
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use validation_server::config::ServerConfig;
//! use validation_server::server::{self, TargetServer};
//!
//! let config = ServerConfig::default();
//! let target = Arc::new(TargetServer::new(&config));
//! server::serve(target, &config.addr).await?;
//! ```

mod error;
mod http;
mod reply;
mod target;

pub use error::ServerError;
pub use http::{router, serve, serve_on};
pub use reply::{Reply, TEXT_PLAIN};
pub use target::TargetServer;
