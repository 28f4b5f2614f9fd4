use std::sync::Arc;

use axum::http::header::{ALLOW, ETAG, LAST_MODIFIED};
use axum::http::{HeaderMap, Method, StatusCode};

use super::reply::Reply;
use crate::clock::{Clock, Granularity, SystemClock};
use crate::conditional::{evaluate_with, ModifiedSince, Outcome, Preconditions};
use crate::config::ServerConfig;
use crate::resource::{render_body, PathFlags, ResourceStore, StoreError, HELP_TEXT};

/// The server under test: one mutable document per path.
///
/// Each request reads the clock once, resolves the path's current version,
/// runs the conditional validator and renders the outcome. The only state
/// kept between requests is the per-path record of PUT mutations.
pub struct TargetServer {
    granularity: Granularity,
    modified_since: ModifiedSince,
    clock: Arc<dyn Clock>,
    store: ResourceStore,
}

impl TargetServer {
    /// Create a server on the system clock.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            granularity: config.granularity,
            modified_since: config.modified_since,
            clock: Arc::new(SystemClock),
            store: ResourceStore::new(),
        }
    }

    /// Replace the clock. Uses builder pattern.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Decide the response to one request.
    pub fn respond(&self, method: &Method, path: &str, headers: &HeaderMap) -> Reply {
        match self.try_respond(method, path, headers) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, path, "resource state unavailable");
                Reply::text(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }

    fn try_respond(
        &self,
        method: &Method,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<Reply, StoreError> {
        if path == "/" {
            if *method != Method::GET {
                return Ok(method_not_allowed("GET"));
            }
            return Ok(Reply::text(StatusCode::OK, HELP_TEXT));
        }

        let flags = PathFlags::from_path(path);
        if !flags.is_resource() {
            return Ok(Reply::text(StatusCode::GONE, "Document is gone"));
        }

        let allow = if flags.accepts_mutation() { "GET, PUT" } else { "GET" };
        if *method == Method::PUT && flags.accepts_mutation() {
            let version = self.store.mutate(path, self.clock.now(), self.granularity)?;
            tracing::debug!(path, version = %version, "document mutated");
            return Ok(Reply::empty(StatusCode::NO_CONTENT));
        }
        if *method != Method::GET {
            return Ok(method_not_allowed(allow));
        }

        let now = self.clock.now();
        let state = self.store.resolve(path, &flags, now, self.granularity)?;
        let preconditions = Preconditions::from_headers(headers);

        let outcome = evaluate_with(
            state.version,
            flags.channels(),
            &preconditions,
            self.modified_since,
        );
        let reply = match outcome {
            Outcome::PreconditionFailed(failed) => {
                Reply::text(StatusCode::PRECONDITION_FAILED, failed.message())
            }
            Outcome::NotModified(_) => Reply::empty(StatusCode::NOT_MODIFIED),
            Outcome::Full(validators) => {
                let echo = flags.headers.then_some(headers);
                let mut reply = Reply::text(StatusCode::OK, render_body(&state, now, echo));
                if let Some(etag) = validators.etag {
                    reply = reply.with_header(ETAG, etag);
                }
                if let Some(date) = validators.last_modified {
                    reply = reply.with_header(LAST_MODIFIED, date);
                }
                reply
            }
        };
        Ok(reply)
    }
}

fn method_not_allowed(allow: &str) -> Reply {
    Reply::text(StatusCode::METHOD_NOT_ALLOWED, "Only GET requests supported")
        .with_header(ALLOW, allow)
}
