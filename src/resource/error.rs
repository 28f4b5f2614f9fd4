use std::fmt;

/// Error type for per-path resource state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The state map was poisoned by a panicking request.
    Poisoned(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Poisoned(msg) => write!(f, "resource state poisoned: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
