//! Seam between the planning engine and the external persistence API.

use way_core::entities::Roadmap;
use way_core::enums::ItemStatus;

use crate::error::SourceError;

/// External roadmap persistence collaborator.
///
/// Implemented by `way-api`'s HTTP client in production and by in-memory
/// fakes in tests. The engine never mutates items locally: it submits a
/// status update and, on confirmation, re-fetches the whole roadmap.
#[allow(async_fn_in_trait)]
pub trait RoadmapSource {
    /// Fetch a roadmap with its full item collection.
    async fn fetch_roadmap(&self, roadmap_id: &str) -> Result<Roadmap, SourceError>;

    /// Ask the server to set one item's status. The response body is not
    /// trusted; callers re-fetch after success.
    async fn update_item_status(
        &self,
        roadmap_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> Result<(), SourceError>;
}
