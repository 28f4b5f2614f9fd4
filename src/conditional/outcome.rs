use http::StatusCode;

use crate::clock::Version;

/// Which validation channels a resource has enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Channels {
    /// Entity tags: `ETag`, `If-Match`, `If-None-Match`.
    pub etag: bool,
    /// Dates: `Last-Modified`, `If-Modified-Since`, `If-Unmodified-Since`.
    pub last_modified: bool,
}

impl Channels {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn etag() -> Self {
        Self {
            etag: true,
            last_modified: false,
        }
    }

    pub fn last_modified() -> Self {
        Self {
            etag: false,
            last_modified: true,
        }
    }

    pub fn both() -> Self {
        Self {
            etag: true,
            last_modified: true,
        }
    }
}

/// How `If-Modified-Since` is compared against the current date.
///
/// Both rules compare exact strings. They differ in which side of the
/// comparison answers 304.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModifiedSince {
    /// Any date other than the current one answers 304. This is the
    /// reference target's behaviour.
    #[default]
    Mismatch,
    /// Only the current date answers 304, as a revalidating cache expects.
    Match,
}

impl ModifiedSince {
    /// Whether a request carrying `since` may reuse its copy of `current`.
    pub fn not_modified(&self, since: &str, current: &str) -> bool {
        match self {
            ModifiedSince::Mismatch => since != current,
            ModifiedSince::Match => since == current,
        }
    }
}

/// Validator headers a full response must carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorHeaders {
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

impl ValidatorHeaders {
    /// Render the headers for `version` on the enabled channels.
    pub fn for_version(version: Version, channels: Channels) -> Self {
        Self {
            etag: channels.etag.then(|| version.etag()),
            last_modified: channels.last_modified.then(|| version.http_date()),
        }
    }
}

/// Why a precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedCondition {
    /// `If-Match` named a different tag.
    IfMatch,
    /// `If-Unmodified-Since` named a different date.
    IfUnmodifiedSince,
}

impl FailedCondition {
    pub fn message(&self) -> &'static str {
        match self {
            FailedCondition::IfMatch => "If-Match failed: ETag did not match",
            FailedCondition::IfUnmodifiedSince => "Document has been modified",
        }
    }
}

/// Why the client's copy is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotModifiedReason {
    /// `If-None-Match` named the current tag or the wildcard.
    IfNoneMatch,
    /// `If-Modified-Since` satisfied the configured [`ModifiedSince`] rule.
    IfModifiedSince,
}

impl NotModifiedReason {
    pub fn message(&self) -> &'static str {
        match self {
            NotModifiedReason::IfNoneMatch => "Content matches on If-None-Match",
            NotModifiedReason::IfModifiedSince => "Document has not been modified",
        }
    }
}

/// Result of evaluating a request's preconditions against a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Serve the full representation with these validators attached.
    Full(ValidatorHeaders),
    /// 304: the client's copy may be reused.
    NotModified(NotModifiedReason),
    /// 412: the client's assumption about the current version is wrong.
    PreconditionFailed(FailedCondition),
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Full(_) => StatusCode::OK,
            Outcome::NotModified(_) => StatusCode::NOT_MODIFIED,
            Outcome::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Outcome::Full(_))
    }
}
