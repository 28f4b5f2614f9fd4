//! Conditional validation: decides between full content, 304 and 412.
//!
//! [`evaluate`] is a pure function of the resource's current [`Version`],
//! the channels the resource enables, and the request's [`Preconditions`].
//! It performs no I/O and never fails: values that do not parse or do not
//! match are simply treated as non-matching.
//!
//! The checks run in a fixed order, which decides precedence when a client
//! sends contradictory headers:
//!
//! 1. `If-Match` present, not `*` and not the current tag → 412
//! 2. `If-None-Match` present and `*` or the current tag → 304
//! 3. `If-Unmodified-Since` present and not the current date → 412
//! 4. `If-Modified-Since` present and not the current date → 304
//! 5. otherwise → full content carrying the current validators
//!
//! Steps 1–2 only apply when the ETag channel is enabled, steps 3–4 only when
//! the Last-Modified channel is. Dates are compared as exact strings against
//! [`Version::http_date`], not as points in time.
//!
//! Step 4 as listed is the default [`ModifiedSince::Mismatch`] rule.
//! [`evaluate_with`] can flip it to [`ModifiedSince::Match`], under which
//! only the current date answers 304.

mod outcome;
mod preconditions;

pub use outcome::{
    Channels, FailedCondition, ModifiedSince, NotModifiedReason, Outcome, ValidatorHeaders,
};
pub use preconditions::{Preconditions, WILDCARD};

use crate::clock::Version;

/// Evaluate `pre` against `current` on the enabled `channels`.
pub fn evaluate(current: Version, channels: Channels, pre: &Preconditions) -> Outcome {
    evaluate_with(current, channels, pre, ModifiedSince::default())
}

/// [`evaluate`] with an explicit `If-Modified-Since` rule.
pub fn evaluate_with(
    current: Version,
    channels: Channels,
    pre: &Preconditions,
    modified_since: ModifiedSince,
) -> Outcome {
    if channels.etag {
        let tag = current.etag();

        if let Some(if_match) = pre.if_match.as_deref() {
            if if_match != WILDCARD && if_match != tag {
                return Outcome::PreconditionFailed(FailedCondition::IfMatch);
            }
        }

        if let Some(if_none_match) = pre.if_none_match.as_deref() {
            if if_none_match == WILDCARD || if_none_match == tag {
                return Outcome::NotModified(NotModifiedReason::IfNoneMatch);
            }
        }
    }

    if channels.last_modified {
        let date = current.http_date();

        if let Some(since) = pre.if_unmodified_since.as_deref() {
            if since != date {
                return Outcome::PreconditionFailed(FailedCondition::IfUnmodifiedSince);
            }
        }

        if let Some(since) = pre.if_modified_since.as_deref() {
            if modified_since.not_modified(since, &date) {
                return Outcome::NotModified(NotModifiedReason::IfModifiedSince);
            }
        }
    }

    Outcome::Full(ValidatorHeaders::for_version(current, channels))
}
