use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::RoadmapItem;
use crate::enums::{RoadmapType, TimeHorizon};

/// Target percentage split of effort across the three work families.
///
/// The three percentages are expected to sum to 100, but the API does not
/// enforce it and neither does this type; see [`Self::total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSplit {
    pub strategic: u32,
    pub customer_driven: u32,
    pub maintenance: u32,
}

impl AllocationSplit {
    /// Sum of the three percentages. 100 for every preset; custom splits
    /// may deviate.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.strategic + self.customer_driven + self.maintenance
    }
}

/// A named, time-horizoned collection of planned work items with an
/// allocation strategy.
///
/// Created by the external generation service; this engine reads it and
/// mutates item statuses in place, never deletes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub roadmap_type: RoadmapType,
    pub time_horizon: TimeHorizon,
    pub allocation_strategy: AllocationSplit,
    #[serde(default)]
    pub items: Vec<RoadmapItem>,
    #[serde(default)]
    pub rationale: Option<String>,
    pub project_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
