//! Pure view projections over the current item collection.
//!
//! Each projection is a stateless derivation from the item slice: feeding
//! the same collection in always yields the same grouping in the same
//! order, so the four simultaneous views can be re-derived at any time
//! without any view-local state.

use serde::Serialize;

use way_core::entities::RoadmapItem;
use way_core::enums::ItemStatus;

/// One timeline bucket: a display quarter and the items assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterBucket {
    pub quarter: String,
    pub items: Vec<RoadmapItem>,
}

/// Timeline view: items grouped by `timeframe.quarter` over a fixed
/// ordered quarter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineProjection {
    /// One bucket per display quarter, in calendar order. Zero-item
    /// buckets stay defined here; renderers skip them via [`Self::non_empty`].
    pub buckets: Vec<QuarterBucket>,
}

impl TimelineProjection {
    /// Buckets that actually hold items, in calendar order.
    pub fn non_empty(&self) -> impl Iterator<Item = &QuarterBucket> {
        self.buckets.iter().filter(|b| !b.items.is_empty())
    }
}

/// Group items by quarter over the given display quarters.
///
/// Items whose quarter matches no display bucket are omitted. That is the
/// contract, not an error.
#[must_use]
pub fn timeline(items: &[RoadmapItem], quarters: &[String]) -> TimelineProjection {
    let buckets = quarters
        .iter()
        .map(|quarter| QuarterBucket {
            quarter: quarter.clone(),
            items: items
                .iter()
                .filter(|i| i.timeframe.quarter == *quarter)
                .cloned()
                .collect(),
        })
        .collect();
    TimelineProjection { buckets }
}

/// One kanban column: a status and the items currently in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanColumn {
    pub status: ItemStatus,
    pub items: Vec<RoadmapItem>,
}

/// Kanban view: exactly the five fixed status columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanProjection {
    pub columns: Vec<KanbanColumn>,
}

/// Group items into the five fixed status columns.
///
/// Within a column, items keep their store order. There is no independent
/// drag order: a drag transition causes a full re-fetch, so insertion
/// order from the store is the only ordering.
#[must_use]
pub fn kanban(items: &[RoadmapItem]) -> KanbanProjection {
    let columns = ItemStatus::ALL
        .into_iter()
        .map(|status| KanbanColumn {
            status,
            items: items.iter().filter(|i| i.status == status).cloned().collect(),
        })
        .collect();
    KanbanProjection { columns }
}

/// List view: the identity projection, item order unchanged.
#[must_use]
pub fn list(items: &[RoadmapItem]) -> Vec<RoadmapItem> {
    items.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{item, quarters_2024};
    use pretty_assertions::assert_eq;
    use way_core::enums::{Category, Priority};

    fn sample_items() -> Vec<RoadmapItem> {
        vec![
            item("itm-1", "Q1 2024", Category::Strategic, Priority::High, ItemStatus::Proposed),
            item("itm-2", "Q1 2024", Category::Maintenance, Priority::Low, ItemStatus::Completed),
            item("itm-3", "Q3 2024", Category::Innovation, Priority::Critical, ItemStatus::Proposed),
            item("itm-4", "FY25", Category::Strategic, Priority::Medium, ItemStatus::Approved),
        ]
    }

    #[test]
    fn timeline_defines_all_buckets_and_omits_unknown_quarters() {
        let projection = timeline(&sample_items(), &quarters_2024());

        assert_eq!(projection.buckets.len(), 4);
        assert_eq!(projection.buckets[0].items.len(), 2);
        assert_eq!(projection.buckets[1].items.len(), 0);
        assert_eq!(projection.buckets[2].items.len(), 1);

        // itm-4 carries "FY25", which matches no display quarter.
        let rendered: Vec<&str> = projection.non_empty().map(|b| b.quarter.as_str()).collect();
        assert_eq!(rendered, ["Q1 2024", "Q3 2024"]);
        let total: usize = projection.buckets.iter().map(|b| b.items.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn kanban_partitions_items_across_five_fixed_columns() {
        let items = sample_items();
        let projection = kanban(&items);

        assert_eq!(projection.columns.len(), 5);
        let statuses: Vec<ItemStatus> = projection.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, ItemStatus::ALL);

        // Every item appears in exactly one column, and each column's count
        // equals the filtered count for that status.
        let total: usize = projection.columns.iter().map(|c| c.items.len()).sum();
        assert_eq!(total, items.len());
        for column in &projection.columns {
            let expected = items.iter().filter(|i| i.status == column.status).count();
            assert_eq!(column.items.len(), expected);
        }

        // Store order preserved within a column.
        let proposed = &projection.columns[0];
        let ids: Vec<&str> = proposed.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["itm-1", "itm-3"]);
    }

    #[test]
    fn list_is_the_identity_projection() {
        let items = sample_items();
        assert_eq!(list(&items), items);
    }

    #[test]
    fn projections_are_deterministic_for_the_same_input() {
        let items = sample_items();
        let quarters = quarters_2024();
        assert_eq!(timeline(&items, &quarters), timeline(&items, &quarters));
        assert_eq!(kanban(&items), kanban(&items));
    }
}
