use http::header::{IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE};
use http::{HeaderMap, HeaderName};

/// Wildcard accepted by `If-Match` and `If-None-Match`.
pub const WILDCARD: &str = "*";

/// The conditional headers of one request.
///
/// Each field holds the first value of its header verbatim. Empty headers
/// count as absent. Values are never parsed: the validator compares them
/// as opaque strings, so a malformed value simply fails to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preconditions {
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub if_unmodified_since: Option<String>,
}

impl Preconditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the four conditional headers from a request.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            if_match: first_value(headers, &IF_MATCH),
            if_none_match: first_value(headers, &IF_NONE_MATCH),
            if_modified_since: first_value(headers, &IF_MODIFIED_SINCE),
            if_unmodified_since: first_value(headers, &IF_UNMODIFIED_SINCE),
        }
    }

    pub fn if_match(mut self, value: impl Into<String>) -> Self {
        self.if_match = Some(value.into());
        self
    }

    pub fn if_none_match(mut self, value: impl Into<String>) -> Self {
        self.if_none_match = Some(value.into());
        self
    }

    pub fn if_modified_since(mut self, value: impl Into<String>) -> Self {
        self.if_modified_since = Some(value.into());
        self
    }

    pub fn if_unmodified_since(mut self, value: impl Into<String>) -> Self {
        self.if_unmodified_since = Some(value.into());
        self
    }

    /// True when no conditional header was sent.
    pub fn is_empty(&self) -> bool {
        self.if_match.is_none()
            && self.if_none_match.is_none()
            && self.if_modified_since.is_none()
            && self.if_unmodified_since.is_none()
    }
}

fn first_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    let value = headers.get(name)?;
    // Non-UTF-8 bytes become replacement characters, which never match a tag.
    let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
