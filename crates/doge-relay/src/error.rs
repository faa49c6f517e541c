//! Error types for relay operations.

/// Errors that can occur when interacting with the wallet API.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a body that does not match the expected schema.
    #[error("bad response: {0}")]
    BadResponse(String),

    /// The transaction was rejected by the network.
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// The server returned an HTTP error status.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// The HTTP status code.
        status_code: u16,
        /// The response body or status text.
        message: String,
    },
}
