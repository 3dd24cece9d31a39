//! # way-api
//!
//! HTTP client for the external roadmap REST API.
//!
//! The API is the system of record: roadmaps are generated and persisted
//! remotely, and this client only reads them and submits item status
//! updates. Endpoints:
//! - `GET  {base}/projects/{projectId}/roadmaps`: list roadmaps
//! - `GET  {base}/roadmaps/{roadmapId}`: fetch one roadmap
//! - `POST {base}/projects/{projectId}/roadmaps/generate`: generate
//! - `PUT  {base}/roadmaps/{roadmapId}/items/{itemId}`: update item status
//!
//! The client also implements [`way_engine::RoadmapSource`] so the planning
//! engine can drive it through its seam.

pub mod items;
pub mod roadmaps;

mod error;
mod http;
mod source;

pub use error::ApiError;
pub use roadmaps::GenerateRoadmapRequest;

/// HTTP client for the roadmap REST API.
#[derive(Clone)]
pub struct RoadmapClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoadmapClient {
    /// Create a client for the API at `base_url` (no trailing slash) with
    /// the given request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("waypoint/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) const fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
