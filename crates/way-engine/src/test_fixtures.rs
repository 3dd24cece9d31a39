//! Shared builders for unit tests.

use chrono::{TimeZone, Utc};

use way_core::entities::{
    AllocationSplit, BusinessJustification, EstimatedDuration, ResourceAllocation, Roadmap,
    RoadmapItem, Timeframe,
};
use way_core::enums::{
    Category, DurationUnit, ItemStatus, Priority, RiskLevel, RoadmapType, TimeHorizon,
};
use way_core::quarters::planning_quarters;

pub fn quarters_2024() -> Vec<String> {
    planning_quarters(2024).to_vec()
}

pub fn item(
    id: &str,
    quarter: &str,
    category: Category,
    priority: Priority,
    status: ItemStatus,
) -> RoadmapItem {
    RoadmapItem {
        id: id.into(),
        title: format!("Item {id}"),
        description: String::new(),
        category,
        priority,
        timeframe: Timeframe {
            quarter: quarter.into(),
            estimated_duration: EstimatedDuration { value: 4, unit: DurationUnit::Weeks },
        },
        resource_allocation: ResourceAllocation {
            percentage: 20,
            team_members: 3,
            estimated_cost: 30_000.0,
        },
        dependencies: vec![],
        related_feedback: vec![],
        business_justification: BusinessJustification {
            strategic_alignment: 7,
            customer_impact: 6,
            revenue_impact: 5,
            risk_level: RiskLevel::Low,
        },
        success_metrics: vec![],
        status,
    }
}

pub fn roadmap(id: &str, items: Vec<RoadmapItem>) -> Roadmap {
    let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
    Roadmap {
        id: id.into(),
        name: "Test Roadmap".into(),
        description: String::new(),
        roadmap_type: RoadmapType::Balanced,
        time_horizon: TimeHorizon::Year,
        allocation_strategy: AllocationSplit {
            strategic: 60,
            customer_driven: 30,
            maintenance: 10,
        },
        items,
        rationale: None,
        project_id: "prj-test".into(),
        created_at: created,
        updated_at: created,
    }
}
