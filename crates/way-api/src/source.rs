//! `RoadmapSource` implementation: plugs the HTTP client into the engine.

use way_core::entities::Roadmap;
use way_core::enums::ItemStatus;
use way_engine::{RoadmapSource, SourceError};

use crate::RoadmapClient;

impl RoadmapSource for RoadmapClient {
    async fn fetch_roadmap(&self, roadmap_id: &str) -> Result<Roadmap, SourceError> {
        self.get_roadmap(roadmap_id)
            .await
            .map_err(|e| SourceError::new(e.to_string()))
    }

    async fn update_item_status(
        &self,
        roadmap_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> Result<(), SourceError> {
        RoadmapClient::update_item_status(self, roadmap_id, item_id, status)
            .await
            .map_err(|e| SourceError::new(e.to_string()))
    }
}
