//! Item status mutation endpoint.

use serde::Serialize;

use way_core::enums::ItemStatus;

use crate::RoadmapClient;
use crate::error::ApiError;
use crate::http::check_response;

#[derive(Debug, Clone, Copy, Serialize)]
struct StatusBody {
    status: ItemStatus,
}

impl RoadmapClient {
    /// Update one item's status on the server.
    ///
    /// The response body is intentionally discarded: the engine re-fetches
    /// the whole roadmap after a confirmed update rather than trusting the
    /// response, so server-side derived fields can never diverge from the
    /// local collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the API returns a
    /// non-success status.
    pub async fn update_item_status(
        &self,
        roadmap_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/roadmaps/{roadmap_id}/items/{item_id}"));
        let body = StatusBody { status };
        check_response(self.http().put(&url).json(&body).send().await?).await?;
        tracing::debug!(roadmap_id, item_id, status = %status, "item status updated");
        Ok(())
    }
}
