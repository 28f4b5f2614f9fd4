use std::fmt::Write;

use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, Request};

use super::error::ScenarioError;
use crate::config::HarnessConfig;

/// A response as the harness keeps it: status, headers and trimmed body.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Path the request was sent to.
    pub path: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Body with surrounding whitespace removed.
    pub body: String,
}

impl Captured {
    pub fn first_line(&self) -> &str {
        first_line(&self.body)
    }
}

pub(crate) fn first_line(body: &str) -> &str {
    body.split('\n').next().unwrap_or_default()
}

/// The server under test, reached over HTTP.
#[derive(Debug, Clone)]
pub struct Target {
    client: Client,
    config: HarnessConfig,
}

impl Target {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Build a request for `path` on the target.
    pub fn request(&self, method: Method, path: &str) -> Result<Request, ScenarioError> {
        self.client
            .request(method, self.config.url_for(path))
            .build()
            .map_err(|e| ScenarioError::transport(format!("building request for {}", path), e))
    }

    /// Send a copy of `request`, log both sides and require `expected`.
    ///
    /// The request itself is left untouched so it can be replayed later.
    pub async fn exchange(
        &self,
        during: &str,
        request: &Request,
        expected: StatusCode,
    ) -> Result<Captured, ScenarioError> {
        let outgoing = request.try_clone().ok_or_else(|| ScenarioError::Unreplayable {
            during: during.to_string(),
        })?;
        tracing::debug!(during, "request:\n    {}", dump_request(request));

        let response = self
            .client
            .execute(outgoing)
            .await
            .map_err(|e| ScenarioError::transport(during, e))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ScenarioError::transport(during, e))?;
        tracing::debug!(during, "response:\n    {}", dump_response(status, &headers, &body));

        if status != expected {
            return Err(ScenarioError::UnexpectedStatus {
                during: during.to_string(),
                url: request.url().to_string(),
                expected: expected.as_u16(),
                actual: status.as_u16(),
            });
        }
        Ok(Captured {
            path: request.url().path().to_string(),
            status,
            headers,
            body: body.trim().to_string(),
        })
    }
}

fn dump_request(request: &Request) -> String {
    let mut out = format!("{} {} HTTP/1.1", request.method(), request.url());
    dump_headers(&mut out, request.headers());
    out
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &str) -> String {
    let mut out = format!("HTTP/1.1 {}", status);
    dump_headers(&mut out, headers);
    if !body.is_empty() {
        let _ = write!(out, "\n\n{}", body.trim());
    }
    out
}

fn dump_headers(out: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        let _ = write!(out, "\n{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
    }
}
