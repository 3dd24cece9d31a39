//! Authoritative in-memory item collection for the selected roadmap.

use std::collections::HashSet;

use way_core::entities::{Roadmap, RoadmapItem};

/// Single source of truth for all views.
///
/// Only whole-collection replacement is supported: `load` and the
/// post-transition re-fetch swap the entire roadmap in, bumping `version`.
/// Views never write here; they re-derive from whatever the store holds.
#[derive(Debug, Default)]
pub struct ItemStore {
    roadmap: Option<Roadmap>,
    version: u64,
    busy: HashSet<String>,
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected roadmap, if one has been loaded.
    #[must_use]
    pub const fn roadmap(&self) -> Option<&Roadmap> {
        self.roadmap.as_ref()
    }

    /// The current item collection, in store order. Empty before the first
    /// successful load.
    #[must_use]
    pub fn items(&self) -> &[RoadmapItem] {
        match &self.roadmap {
            Some(roadmap) => &roadmap.items,
            None => &[],
        }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&RoadmapItem> {
        self.items().iter().find(|i| i.id == item_id)
    }

    /// Collection identity, incremented on every replacement. Memoization
    /// keys on this instead of deep equality.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Replace the whole collection with a freshly fetched roadmap.
    pub fn replace(&mut self, roadmap: Roadmap) {
        tracing::debug!(
            roadmap_id = %roadmap.id,
            items = roadmap.items.len(),
            version = self.version + 1,
            "item store replaced"
        );
        self.roadmap = Some(roadmap);
        self.version += 1;
    }

    /// Whether a status change for this item is outstanding.
    #[must_use]
    pub fn is_busy(&self, item_id: &str) -> bool {
        self.busy.contains(item_id)
    }

    /// Mark an item as having an in-flight transition. Returns `false` if
    /// one is already outstanding for it.
    pub fn begin_transition(&mut self, item_id: &str) -> bool {
        self.busy.insert(item_id.to_string())
    }

    /// Clear the in-flight mark, whether the transition succeeded or failed.
    pub fn end_transition(&mut self, item_id: &str) {
        self.busy.remove(item_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_items_and_version_zero() {
        let store = ItemStore::new();
        assert!(store.roadmap().is_none());
        assert!(store.items().is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn busy_flags_are_per_item() {
        let mut store = ItemStore::new();
        assert!(store.begin_transition("itm-a"));
        assert!(!store.begin_transition("itm-a"));
        assert!(store.begin_transition("itm-b"));
        assert!(store.is_busy("itm-a"));

        store.end_transition("itm-a");
        assert!(!store.is_busy("itm-a"));
        assert!(store.is_busy("itm-b"));
    }
}
