//! Resolver error types

use thiserror::Error;

/// Errors reported by an asynchronous resolver
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The collaborator answered with a non-success status other than 404
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a record of the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request timeout")]
    Timeout,
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::Parse(err.to_string())
    }
}
