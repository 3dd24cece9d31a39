//! CLI response types returned as JSON by `way` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `way list`, `way show`, `way set-status`, and `way export`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Roadmap;
use crate::enums::ItemStatus;

/// Response from `way list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoadmapListResponse {
    pub project_id: String,
    pub roadmaps: Vec<Roadmap>,
}

/// Response from `way show` and `way generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
}

/// Response from `way set-status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatusChangeResponse {
    pub item_id: String,
    pub from: ItemStatus,
    pub to: ItemStatus,
    /// Whether a transition actually ran; false when the requested status
    /// equals the current one (no API call, no store mutation).
    pub changed: bool,
}

/// Response from `way export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub sheets: Vec<String>,
    pub item_count: usize,
}
