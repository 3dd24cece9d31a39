//! Allocation strategy resolution.
//!
//! Maps a roadmap type to its target percentage split. Presets are fixed;
//! `custom` passes the caller-supplied split through verbatim without
//! validating that it sums to 100; callers that care can check
//! [`AllocationSplit::total`].

use crate::entities::AllocationSplit;
use crate::enums::RoadmapType;

/// Preset split for `strategic-only` roadmaps.
pub const STRATEGIC_ONLY_SPLIT: AllocationSplit = AllocationSplit {
    strategic: 70,
    customer_driven: 20,
    maintenance: 10,
};

/// Preset split for `customer-only` roadmaps.
pub const CUSTOMER_ONLY_SPLIT: AllocationSplit = AllocationSplit {
    strategic: 20,
    customer_driven: 70,
    maintenance: 10,
};

/// Preset split for `balanced` roadmaps, and the fallback when a `custom`
/// roadmap supplies no split of its own.
pub const BALANCED_SPLIT: AllocationSplit = AllocationSplit {
    strategic: 60,
    customer_driven: 30,
    maintenance: 10,
};

/// Resolve a roadmap type (plus an optional custom split) to its target
/// allocation.
///
/// For `custom`, the supplied split is returned unchanged even when its
/// total is not 100; a warning is logged so the gap is visible without
/// changing behavior.
#[must_use]
pub fn resolve_allocation(
    roadmap_type: RoadmapType,
    custom: Option<AllocationSplit>,
) -> AllocationSplit {
    let split = match roadmap_type {
        RoadmapType::StrategicOnly => STRATEGIC_ONLY_SPLIT,
        RoadmapType::CustomerOnly => CUSTOMER_ONLY_SPLIT,
        RoadmapType::Balanced => BALANCED_SPLIT,
        RoadmapType::Custom => custom.unwrap_or(BALANCED_SPLIT),
    };
    if split.total() != 100 {
        tracing::warn!(
            total = split.total(),
            "allocation percentages do not sum to 100"
        );
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preset_table_matches_contract() {
        assert_eq!(
            resolve_allocation(RoadmapType::StrategicOnly, None),
            AllocationSplit { strategic: 70, customer_driven: 20, maintenance: 10 }
        );
        assert_eq!(
            resolve_allocation(RoadmapType::CustomerOnly, None),
            AllocationSplit { strategic: 20, customer_driven: 70, maintenance: 10 }
        );
        assert_eq!(
            resolve_allocation(RoadmapType::Balanced, None),
            AllocationSplit { strategic: 60, customer_driven: 30, maintenance: 10 }
        );
    }

    #[test]
    fn presets_ignore_a_supplied_custom_split() {
        let stray = AllocationSplit { strategic: 1, customer_driven: 2, maintenance: 3 };
        assert_eq!(
            resolve_allocation(RoadmapType::Balanced, Some(stray)),
            BALANCED_SPLIT
        );
    }

    #[test]
    fn custom_split_passes_through_unvalidated() {
        // 50/50/0 does not match any preset and does not sum cleanly with
        // the balanced table, but resolution keeps it verbatim.
        let split = AllocationSplit { strategic: 50, customer_driven: 50, maintenance: 0 };
        assert_eq!(resolve_allocation(RoadmapType::Custom, Some(split)), split);

        let skewed = AllocationSplit { strategic: 80, customer_driven: 40, maintenance: 0 };
        assert_eq!(resolve_allocation(RoadmapType::Custom, Some(skewed)), skewed);
        assert_eq!(skewed.total(), 120);
    }

    #[test]
    fn custom_without_split_falls_back_to_balanced() {
        assert_eq!(resolve_allocation(RoadmapType::Custom, None), BALANCED_SPLIT);
    }
}
