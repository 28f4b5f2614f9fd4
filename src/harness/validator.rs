use http::header::{
    HeaderName, ETAG, IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE,
    LAST_MODIFIED,
};
use http::Method;
use reqwest::Request;

use super::error::ScenarioError;
use super::target::{Captured, Target};

/// The two conditional requests a scenario replays before and after mutation.
#[derive(Debug)]
pub struct DerivedRequests {
    /// Asks "has it changed?": 304 while unchanged, 200 afterwards.
    pub modified: Request,
    /// Asserts "it is unchanged": 200 while unchanged, 412 afterwards.
    pub same: Request,
}

/// How a scenario turns a baseline response into conditional requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// `ETag` replayed as `If-None-Match` / `If-Match`.
    ETag,
    /// `Last-Modified` replayed as `If-Modified-Since` / `If-Unmodified-Since`.
    LastModified,
}

impl Validator {
    /// Response header the validator reads from the baseline.
    pub fn source_header(&self) -> HeaderName {
        match self {
            Validator::ETag => ETAG,
            Validator::LastModified => LAST_MODIFIED,
        }
    }

    fn derived_headers(&self) -> (HeaderName, HeaderName) {
        match self {
            Validator::ETag => (IF_NONE_MATCH, IF_MATCH),
            Validator::LastModified => (IF_MODIFIED_SINCE, IF_UNMODIFIED_SINCE),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Validator::ETag => "etag",
            Validator::LastModified => "last-modified",
        }
    }

    /// Build the "modified" and "same" requests from a baseline response.
    pub fn build(&self, target: &Target, baseline: &Captured) -> Result<DerivedRequests, ScenarioError> {
        let source = self.source_header();
        let value = baseline
            .headers
            .get(&source)
            .ok_or_else(|| ScenarioError::MissingValidator {
                header: source.to_string(),
            })?;
        let (modified_header, same_header) = self.derived_headers();

        let mut modified = target.request(Method::GET, &baseline.path)?;
        modified.headers_mut().insert(modified_header, value.clone());
        let mut same = target.request(Method::GET, &baseline.path)?;
        same.headers_mut().insert(same_header, value.clone());

        Ok(DerivedRequests { modified, same })
    }
}
