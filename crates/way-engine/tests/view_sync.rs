//! End-to-end view synchronization: one authoritative collection feeding
//! timeline, kanban, list, and insights, kept consistent across a
//! server-confirmed status transition.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use way_core::entities::{
    AllocationSplit, BusinessJustification, EstimatedDuration, ResourceAllocation, Roadmap,
    RoadmapItem, Timeframe,
};
use way_core::enums::{
    Category, DurationUnit, ItemStatus, Priority, RiskLevel, RoadmapType, TimeHorizon,
};
use way_core::quarters::planning_quarters;
use way_engine::analytics::AnalyticsCache;
use way_engine::planner::Planner;
use way_engine::projector::{kanban, list, timeline};
use way_engine::wireframe::synthesize_wireframes;
use way_engine::{RoadmapSource, SourceError};

fn item(id: &str, quarter: &str, category: Category, status: ItemStatus) -> RoadmapItem {
    RoadmapItem {
        id: id.into(),
        title: format!("Item {id}"),
        description: "Planned work".into(),
        category,
        priority: Priority::Medium,
        timeframe: Timeframe {
            quarter: quarter.into(),
            estimated_duration: EstimatedDuration { value: 2, unit: DurationUnit::Months },
        },
        resource_allocation: ResourceAllocation {
            percentage: 25,
            team_members: 2,
            estimated_cost: 20_000.0,
        },
        dependencies: vec![],
        related_feedback: vec![],
        business_justification: BusinessJustification {
            strategic_alignment: 6,
            customer_impact: 6,
            revenue_impact: 6,
            risk_level: RiskLevel::Medium,
        },
        success_metrics: vec![],
        status,
    }
}

fn roadmap(items: Vec<RoadmapItem>) -> Roadmap {
    let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
    Roadmap {
        id: "rdm-sync".into(),
        name: "Sync Roadmap".into(),
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
        project_id: "prj-sync".into(),
        created_at: created,
        updated_at: created,
    }
}

#[derive(Clone)]
struct ServerFake {
    roadmap: Arc<Mutex<Roadmap>>,
}

impl RoadmapSource for ServerFake {
    async fn fetch_roadmap(&self, _roadmap_id: &str) -> Result<Roadmap, SourceError> {
        Ok(self.roadmap.lock().unwrap().clone())
    }

    async fn update_item_status(
        &self,
        _roadmap_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> Result<(), SourceError> {
        let mut roadmap = self.roadmap.lock().unwrap();
        let target = roadmap
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| SourceError::new(format!("unknown item {item_id}")))?;
        target.status = status;
        Ok(())
    }
}

#[tokio::test]
async fn all_views_rederive_consistently_after_a_transition() {
    let server = ServerFake {
        roadmap: Arc::new(Mutex::new(roadmap(vec![
            item("itm-a", "Q1 2024", Category::Strategic, ItemStatus::Proposed),
            item("itm-b", "Q2 2024", Category::CustomerDriven, ItemStatus::Approved),
            item("itm-c", "Q2 2024", Category::Maintenance, ItemStatus::Proposed),
        ]))),
    };
    let mut planner = Planner::new(server);
    let mut cache = AnalyticsCache::new();
    let quarters = planning_quarters(2024).to_vec();

    planner.load("rdm-sync").await.unwrap();
    let before = cache.get_or_compute(planner.store().version(), planner.store().items());
    assert_eq!(before.status_overview.len(), 2);

    planner
        .apply_status_change("itm-a", ItemStatus::InProgress)
        .await
        .unwrap();

    let items = planner.store().items();

    // Kanban reflects the confirmed server state.
    let board = kanban(items);
    let in_progress = board.columns.iter().find(|c| c.status == ItemStatus::InProgress).unwrap();
    assert_eq!(in_progress.items.len(), 1);
    assert_eq!(in_progress.items[0].id, "itm-a");

    // Timeline grouping is untouched by a status change.
    let line = timeline(items, &quarters);
    let rendered: Vec<usize> = line.buckets.iter().map(|b| b.items.len()).collect();
    assert_eq!(rendered, [1, 2, 0, 0]);

    // List stays the identity projection in store order.
    let flat = list(items);
    let ids: Vec<&str> = flat.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["itm-a", "itm-b", "itm-c"]);

    // Insights re-derive from the bumped version; the stale snapshot was
    // invalidated by the post-transition re-fetch.
    let after = cache.get_or_compute(planner.store().version(), items);
    assert_eq!(after.item_count, 3);
    let statuses: Vec<ItemStatus> = after.status_overview.iter().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        [ItemStatus::Proposed, ItemStatus::Approved, ItemStatus::InProgress]
    );

    // Wireframes skip the maintenance item.
    let screens = synthesize_wireframes(items);
    assert_eq!(screens.len(), 2);
}
