//! Error types for the target server.

use std::error::Error;
use std::fmt;
use std::io;

/// Error type for running the target server.
#[derive(Debug)]
pub enum ServerError {
    /// The listen address could not be bound.
    Bind { addr: String, source: io::Error },
    /// The accept loop failed.
    Serve(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { addr, source } => write!(f, "cannot listen on {}: {}", addr, source),
            ServerError::Serve(e) => write!(f, "server error: {}", e),
        }
    }
}

impl Error for ServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Serve(e) => Some(e),
        }
    }
}

impl From<io::Error> for ServerError {
    fn from(err: io::Error) -> Self {
        ServerError::Serve(err)
    }
}
