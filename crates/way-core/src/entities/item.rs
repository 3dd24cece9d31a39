use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, DurationUnit, ItemStatus, Priority, RiskLevel};

/// Quarter assignment and duration estimate for a roadmap item.
///
/// `quarter` is a display label such as `"Q1 2024"`. Items whose quarter
/// matches no known display bucket are omitted from the timeline projection
/// rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
    pub quarter: String,
    pub estimated_duration: EstimatedDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedDuration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl EstimatedDuration {
    /// Human-readable label used in list views and export cells,
    /// e.g. `"6 weeks"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

/// Team and cost assignment for a roadmap item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAllocation {
    pub percentage: u32,
    pub team_members: u32,
    pub estimated_cost: f64,
}

/// Link from a roadmap item back to the customer feedback that motivated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackLink {
    pub relevance_score: f64,
    #[serde(default)]
    pub customer_quotes: Vec<String>,
}

/// Business-case scores for a roadmap item. The numeric scores are
/// unconstrained integers used only for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessJustification {
    pub strategic_alignment: i64,
    pub customer_impact: i64,
    pub revenue_impact: i64,
    pub risk_level: RiskLevel,
}

/// A discrete unit of planned work, owned exclusively by exactly one roadmap.
///
/// `status` is the only field this engine mutates. Non-critical collections
/// default to empty so a partially malformed API payload still parses and
/// downstream export/analytics can continue with what is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub timeframe: Timeframe,
    pub resource_allocation: ResourceAllocation,
    /// Ids of other items this one depends on. Informational only: no
    /// cycle or referential checks are performed.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub related_feedback: Vec<FeedbackLink>,
    pub business_justification: BusinessJustification,
    #[serde(default)]
    pub success_metrics: Vec<String>,
    pub status: ItemStatus,
}
