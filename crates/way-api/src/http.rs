//! Shared HTTP response helpers for the roadmap API client.
//!
//! Centralizes the status-code check (non-success → [`ApiError::Api`] with
//! the response body) so endpoint modules stay focused on request
//! construction and response mapping.

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise consumes the body
/// into an [`ApiError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
