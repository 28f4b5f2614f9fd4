//! Error types for scenario execution.

use std::error::Error;
use std::fmt;

/// Which body comparison failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyCheck {
    /// First lines were expected to be equal.
    FirstLineDiffers,
    /// First lines were expected to differ.
    FirstLineSame,
    /// Bodies were expected to be identical.
    BodiesDiffer,
    /// Bodies were expected to differ.
    BodiesIdentical,
}

impl fmt::Display for BodyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BodyCheck::FirstLineDiffers => {
                "first lines of responses are different, expected to be same"
            }
            BodyCheck::FirstLineSame => {
                "first lines of response bodies are identical, expected differences"
            }
            BodyCheck::BodiesDiffer => "response bodies are not the same, expected to be identical",
            BodyCheck::BodiesIdentical => "response bodies are identical, expected differences",
        };
        f.write_str(msg)
    }
}

/// A fatal failure of one scenario or probe.
///
/// Nothing is retried: the first error ends the scenario it occurred in
/// and leaves sibling scenarios running.
#[derive(Debug)]
pub enum ScenarioError {
    /// The request could not be built, sent, or its response read.
    Transport {
        during: String,
        source: reqwest::Error,
    },
    /// The target answered with a status other than the expected one.
    UnexpectedStatus {
        during: String,
        url: String,
        expected: u16,
        actual: u16,
    },
    /// A body comparison failed.
    BodyMismatch { during: String, check: BodyCheck },
    /// The baseline response lacked the header a validator derives from.
    MissingValidator { header: String },
    /// A stored request could not be cloned for replay.
    Unreplayable { during: String },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Transport { during, source } => {
                write!(f, "{}: transport error: {}", during, source)
            }
            ScenarioError::UnexpectedStatus {
                during,
                url,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected status {} from {}, but got {}",
                during, expected, url, actual
            ),
            ScenarioError::BodyMismatch { during, check } => write!(f, "{}: {}", during, check),
            ScenarioError::MissingValidator { header } => {
                write!(f, "baseline response has no {} header", header)
            }
            ScenarioError::Unreplayable { during } => {
                write!(f, "{}: request cannot be replayed", during)
            }
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScenarioError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ScenarioError {
    pub(crate) fn transport(during: impl Into<String>, source: reqwest::Error) -> Self {
        ScenarioError::Transport {
            during: during.into(),
            source,
        }
    }
}
