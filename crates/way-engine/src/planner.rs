//! Status transition engine.
//!
//! Drives load and status-change flows against a [`RoadmapSource`]. Status
//! changes are server-confirmed, never optimistic: the store is only
//! mutated by a full re-fetch after the server accepts the update, so a
//! failed call can never leave a phantom intermediate state in any view.

use way_core::enums::ItemStatus;

use crate::error::EngineError;
use crate::source::RoadmapSource;
use crate::store::ItemStore;

/// A kanban drag-and-drop event: "move the source item to the status named
/// by the destination column". Handled identically to a direct status
/// selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub item_id: String,
    pub from_status: ItemStatus,
    pub to_status: ItemStatus,
}

/// Result of a requested status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub item_id: String,
    pub from: ItemStatus,
    pub to: ItemStatus,
    /// `false` when the requested status equals the current one: no API
    /// call was made and the store was not touched.
    pub changed: bool,
}

/// Planning engine: owns the item store and the source seam.
#[derive(Debug)]
pub struct Planner<S> {
    source: S,
    store: ItemStore,
}

impl<S: RoadmapSource> Planner<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source, store: ItemStore::new() }
    }

    /// Read access for projections, analytics, and export.
    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Replace the whole collection from the external API.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Fetch`] on network/parse failure. The
    /// previous collection stays intact so views can keep showing
    /// stale-but-valid data.
    pub async fn load(&mut self, roadmap_id: &str) -> Result<(), EngineError> {
        let roadmap = self.source.fetch_roadmap(roadmap_id).await?;
        self.store.replace(roadmap);
        Ok(())
    }

    /// Apply a status change via direct selection.
    ///
    /// Flow: no-op when the item already has `new_status`; otherwise mark
    /// the item busy, submit the update, and on confirmation re-fetch and
    /// replace the full collection. Transitions are unrestricted any-to-any.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoRoadmap`] before the first load.
    /// - [`EngineError::ItemNotFound`] for an unknown item id.
    /// - [`EngineError::TransitionInFlight`] while a change for the same
    ///   item is outstanding (per-item flag, not a global lock).
    /// - [`EngineError::Fetch`] when the update or the re-fetch fails; the
    ///   item's displayed status remains its pre-call value.
    pub async fn apply_status_change(
        &mut self,
        item_id: &str,
        new_status: ItemStatus,
    ) -> Result<TransitionOutcome, EngineError> {
        let roadmap_id = self
            .store
            .roadmap()
            .map(|r| r.id.clone())
            .ok_or(EngineError::NoRoadmap)?;
        let current = self
            .store
            .item(item_id)
            .map(|i| i.status)
            .ok_or_else(|| EngineError::ItemNotFound(item_id.to_string()))?;

        if current == new_status {
            return Ok(TransitionOutcome {
                item_id: item_id.to_string(),
                from: current,
                to: new_status,
                changed: false,
            });
        }
        if !self.store.begin_transition(item_id) {
            return Err(EngineError::TransitionInFlight(item_id.to_string()));
        }

        let result = self
            .source
            .update_item_status(&roadmap_id, item_id, new_status)
            .await;
        // No cancellation: the transition either completed or failed, so the
        // busy flag clears on both paths before anything else happens.
        self.store.end_transition(item_id);
        if let Err(error) = result {
            tracing::warn!(item_id, %error, "status update rejected, store untouched");
            return Err(error.into());
        }

        let roadmap = self.source.fetch_roadmap(&roadmap_id).await?;
        self.store.replace(roadmap);
        tracing::info!(item_id, from = %current, to = %new_status, "status transition confirmed");
        Ok(TransitionOutcome {
            item_id: item_id.to_string(),
            from: current,
            to: new_status,
            changed: true,
        })
    }

    /// Apply a status change originating from a kanban drag-and-drop.
    ///
    /// A drop onto the item's current column is a no-op: no API call, no
    /// store refresh. Anything else behaves exactly like
    /// [`Self::apply_status_change`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::apply_status_change`].
    pub async fn on_item_dropped(
        &mut self,
        event: DropEvent,
    ) -> Result<TransitionOutcome, EngineError> {
        if event.from_status == event.to_status {
            return Ok(TransitionOutcome {
                item_id: event.item_id,
                from: event.from_status,
                to: event.to_status,
                changed: false,
            });
        }
        self.apply_status_change(&event.item_id, event.to_status).await
    }
}
