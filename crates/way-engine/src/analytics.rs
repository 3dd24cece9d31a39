//! Analytics aggregation over the current item collection.
//!
//! Four independent categorical distributions, each a single O(n) pass.
//! Re-derived whenever the item collection changes; [`AnalyticsCache`]
//! memoizes on the store's version counter (collection identity, not deep
//! equality) so re-renders of an unchanged collection are free.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use way_core::entities::RoadmapItem;
use way_core::enums::{Category, ItemStatus, Priority};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ItemStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterCount {
    pub quarter: String,
    pub count: usize,
}

/// The insights view's aggregate series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    /// Sparse: only categories present in the data, in declaration order.
    pub category_distribution: Vec<CategoryCount>,
    /// Dense: exactly four entries in fixed display order
    /// `critical, high, medium, low`, zero counts included.
    pub priority_breakdown: Vec<PriorityCount>,
    /// Sparse: only statuses present in the data, in column order.
    pub status_overview: Vec<StatusCount>,
    /// Count per distinct quarter string present, sorted lexicographically
    /// by label.
    pub quarterly_load: Vec<QuarterCount>,
    pub item_count: usize,
}

/// Compute all four distributions in one pass over the items.
#[must_use]
pub fn compute_analytics(items: &[RoadmapItem]) -> AnalyticsSnapshot {
    let mut by_category = [0usize; Category::ALL.len()];
    let mut by_priority = [0usize; Priority::ALL.len()];
    let mut by_status = [0usize; ItemStatus::ALL.len()];
    let mut by_quarter: BTreeMap<&str, usize> = BTreeMap::new();

    for item in items {
        by_category[index_of(&Category::ALL, item.category)] += 1;
        by_priority[index_of(&Priority::ALL, item.priority)] += 1;
        by_status[index_of(&ItemStatus::ALL, item.status)] += 1;
        *by_quarter.entry(item.timeframe.quarter.as_str()).or_default() += 1;
    }

    AnalyticsSnapshot {
        category_distribution: Category::ALL
            .into_iter()
            .zip(by_category)
            .filter(|&(_, count)| count > 0)
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
        priority_breakdown: Priority::ALL
            .into_iter()
            .zip(by_priority)
            .map(|(priority, count)| PriorityCount { priority, count })
            .collect(),
        status_overview: ItemStatus::ALL
            .into_iter()
            .zip(by_status)
            .filter(|&(_, count)| count > 0)
            .map(|(status, count)| StatusCount { status, count })
            .collect(),
        quarterly_load: by_quarter
            .into_iter()
            .map(|(quarter, count)| QuarterCount { quarter: quarter.to_string(), count })
            .collect(),
        item_count: items.len(),
    }
}

fn index_of<T: PartialEq + Copy, const N: usize>(all: &[T; N], value: T) -> usize {
    all.iter().position(|&v| v == value).unwrap_or(0)
}

/// Memoization keyed on the item store's version counter.
///
/// Invalidated by every successful load/replace (the version bumps).
/// Returns an `Arc` so repeated reads of the same collection share one
/// snapshot allocation.
#[derive(Debug, Default)]
pub struct AnalyticsCache {
    version: Option<u64>,
    snapshot: Option<Arc<AnalyticsSnapshot>>,
}

impl AnalyticsCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot when `version` matches the last computed
    /// one; otherwise recompute and cache.
    pub fn get_or_compute(
        &mut self,
        version: u64,
        items: &[RoadmapItem],
    ) -> Arc<AnalyticsSnapshot> {
        if self.version == Some(version) {
            if let Some(snapshot) = &self.snapshot {
                return Arc::clone(snapshot);
            }
        }
        let snapshot = Arc::new(compute_analytics(items));
        self.version = Some(version);
        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }
}
