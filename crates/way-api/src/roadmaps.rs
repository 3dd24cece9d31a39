//! Roadmap read and generate endpoints.

use serde::Serialize;

use way_core::entities::{AllocationSplit, Roadmap};
use way_core::enums::{RoadmapType, TimeHorizon};

use crate::RoadmapClient;
use crate::error::ApiError;
use crate::http::check_response;

/// Body of `POST /projects/{projectId}/roadmaps/generate`.
///
/// `custom_allocation` is only meaningful for [`RoadmapType::Custom`] and is
/// omitted from the payload when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub roadmap_type: RoadmapType,
    pub time_horizon: TimeHorizon,
    pub allocation_type: RoadmapType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_allocation: Option<AllocationSplit>,
}

impl RoadmapClient {
    /// List all roadmaps belonging to a project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_roadmaps(&self, project_id: &str) -> Result<Vec<Roadmap>, ApiError> {
        let url = self.url(&format!("/projects/{project_id}/roadmaps"));
        let resp = check_response(self.http().get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Fetch a single roadmap with its full item collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_roadmap(&self, roadmap_id: &str) -> Result<Roadmap, ApiError> {
        let url = self.url(&format!("/roadmaps/{roadmap_id}"));
        let resp = check_response(self.http().get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Ask the external generation service to create a roadmap.
    ///
    /// Returns the full generated roadmap. Generation itself (item
    /// selection, wording, scoring) happens server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn generate_roadmap(
        &self,
        project_id: &str,
        request: &GenerateRoadmapRequest,
    ) -> Result<Roadmap, ApiError> {
        let url = self.url(&format!("/projects/{project_id}/roadmaps/generate"));
        let resp = check_response(self.http().post(&url).json(request).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIST_FIXTURE: &str = r#"[
        {
            "id": "rdm-3f81",
            "name": "2024 Platform Roadmap",
            "description": "Four-quarter plan.",
            "type": "balanced",
            "timeHorizon": "year",
            "allocationStrategy": { "strategic": 60, "customerDriven": 30, "maintenance": 10 },
            "items": [],
            "rationale": null,
            "projectId": "prj-0a4e",
            "createdAt": "2024-01-05T09:30:00Z",
            "updatedAt": "2024-02-11T16:45:00Z"
        }
    ]"#;

    #[test]
    fn parse_roadmap_list_response() {
        let roadmaps: Vec<Roadmap> = serde_json::from_str(LIST_FIXTURE).unwrap();
        assert_eq!(roadmaps.len(), 1);

        let first = &roadmaps[0];
        assert_eq!(first.id, "rdm-3f81");
        assert_eq!(first.roadmap_type, RoadmapType::Balanced);
        assert_eq!(first.time_horizon, TimeHorizon::Year);
        assert_eq!(first.allocation_strategy.customer_driven, 30);
        assert!(first.items.is_empty());
        assert_eq!(first.rationale, None);
    }

    #[test]
    fn generate_request_serializes_to_wire_names() {
        let request = GenerateRoadmapRequest {
            name: "Q3 push".into(),
            description: "Focus on retention.".into(),
            roadmap_type: RoadmapType::Custom,
            time_horizon: TimeHorizon::HalfYear,
            allocation_type: RoadmapType::Custom,
            custom_allocation: Some(AllocationSplit {
                strategic: 50,
                customer_driven: 50,
                maintenance: 0,
            }),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["type"], "custom");
        assert_eq!(body["timeHorizon"], "half-year");
        assert_eq!(body["allocationType"], "custom");
        assert_eq!(body["customAllocation"]["customerDriven"], 50);
    }

    #[test]
    fn generate_request_omits_absent_custom_allocation() {
        let request = GenerateRoadmapRequest {
            name: "Baseline".into(),
            description: String::new(),
            roadmap_type: RoadmapType::Balanced,
            time_horizon: TimeHorizon::Quarter,
            allocation_type: RoadmapType::Balanced,
            custom_allocation: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("customAllocation").is_none());
    }
}
