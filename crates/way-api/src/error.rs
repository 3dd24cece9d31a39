//! Roadmap API error types.

use thiserror::Error;

/// Errors that can occur when talking to the roadmap REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (including body decode failures).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },
}
