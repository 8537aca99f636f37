//! Error types for remote joke fetching.

use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching a joke from a remote source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request itself failed (connection, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected status {status} from joke API")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body did not match the expected JokeAPI shape.
    #[error("malformed joke API response: {message}")]
    Malformed {
        /// Description of what was missing or wrong.
        message: String,
    },

    /// JokeAPI reported an application-level error payload.
    #[error("joke API error: {message}")]
    Api {
        /// The error message from the API.
        message: String,
    },

    /// A scripted source ran out of queued responses.
    #[error("scripted source exhausted")]
    Exhausted,
}

impl FetchError {
    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
