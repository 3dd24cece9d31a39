//! Status and classification enums for Waypoint roadmap entities.
//!
//! All enums use kebab-case serialization via `#[serde(rename_all = "kebab-case")]`
//! to match the external roadmap API's JSON contract (`customer-driven`,
//! `in-progress`, `strategic-only`, …). Enums with a fixed display order expose
//! an `ALL` constant so projections and exports stay deterministic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RoadmapType
// ---------------------------------------------------------------------------

/// Allocation strategy family of a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapType {
    StrategicOnly,
    CustomerOnly,
    Balanced,
    Custom,
}

impl RoadmapType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrategicOnly => "strategic-only",
            Self::CustomerOnly => "customer-only",
            Self::Balanced => "balanced",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for RoadmapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TimeHorizon
// ---------------------------------------------------------------------------

/// Planning horizon of a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TimeHorizon {
    Quarter,
    HalfYear,
    Year,
}

impl TimeHorizon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::HalfYear => "half-year",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Work category of a roadmap item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Strategic,
    CustomerDriven,
    Maintenance,
    Innovation,
}

impl Category {
    /// All categories in declaration order. Used for sparse aggregation
    /// ordering and per-category export sheets.
    pub const ALL: [Self; 4] = [
        Self::Strategic,
        Self::CustomerDriven,
        Self::Maintenance,
        Self::Innovation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strategic => "strategic",
            Self::CustomerDriven => "customer-driven",
            Self::Maintenance => "maintenance",
            Self::Innovation => "innovation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a roadmap item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Fixed display order for the priority breakdown. The breakdown is
    /// dense: all four entries appear even at count zero.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Workflow status of a roadmap item. The only field the planning engine
/// is authorized to mutate.
///
/// Transitions are unrestricted: any status may move to any other status.
/// There is no terminal-state lock and no enforced workflow ordering; the
/// transition engine treats a move to the current status as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Proposed,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl ItemStatus {
    /// The five fixed kanban columns, in column order.
    pub const ALL: [Self; 5] = [
        Self::Proposed,
        Self::Approved,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Approved => "approved",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk level in a business justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DurationUnit
// ---------------------------------------------------------------------------

/// Unit of an estimated item duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DurationUnit {
    Weeks,
    Months,
}

impl DurationUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeviceKind / ComponentKind (wireframe synthesis)
// ---------------------------------------------------------------------------

/// Target device of a synthesized wireframe screen, assigned round-robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceKind {
    /// Round-robin assignment order for synthesized screens.
    pub const ROTATION: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a synthesized wireframe component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Header,
    Content,
    Button,
}

impl ComponentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Content => "content",
            Self::Button => "button",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        roadmap_type_strategic_only,
        RoadmapType,
        RoadmapType::StrategicOnly,
        "strategic-only"
    );
    test_serde_roundtrip!(roadmap_type_custom, RoadmapType, RoadmapType::Custom, "custom");

    test_serde_roundtrip!(horizon_half_year, TimeHorizon, TimeHorizon::HalfYear, "half-year");

    test_serde_roundtrip!(
        category_customer_driven,
        Category,
        Category::CustomerDriven,
        "customer-driven"
    );
    test_serde_roundtrip!(category_maintenance, Category, Category::Maintenance, "maintenance");

    test_serde_roundtrip!(priority_critical, Priority, Priority::Critical, "critical");

    test_serde_roundtrip!(status_in_progress, ItemStatus, ItemStatus::InProgress, "in-progress");
    test_serde_roundtrip!(status_cancelled, ItemStatus, ItemStatus::Cancelled, "cancelled");

    test_serde_roundtrip!(risk_medium, RiskLevel, RiskLevel::Medium, "medium");
    test_serde_roundtrip!(duration_weeks, DurationUnit, DurationUnit::Weeks, "weeks");
    test_serde_roundtrip!(device_tablet, DeviceKind, DeviceKind::Tablet, "tablet");

    #[test]
    fn priority_display_order_is_fixed() {
        let labels: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(labels, ["critical", "high", "medium", "low"]);
    }

    #[test]
    fn status_columns_cover_all_variants() {
        assert_eq!(ItemStatus::ALL.len(), 5);
        assert_eq!(format!("{}", ItemStatus::InProgress), "in-progress");
    }
}
