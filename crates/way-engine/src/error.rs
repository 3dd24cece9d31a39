//! Planning engine error types.

use thiserror::Error;

/// Failure reported by a [`crate::RoadmapSource`] implementation.
///
/// Opaque on purpose: the engine reacts the same way to a network fault,
/// a non-success status, or a parse failure. It leaves the store intact
/// and surfaces the message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Errors raised by the planning engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The external API call failed. The item store was not mutated; views
    /// keep rendering the pre-call collection.
    #[error("fetch failed: {0}")]
    Fetch(#[from] SourceError),

    /// No roadmap has been loaded into the store yet.
    #[error("no roadmap loaded")]
    NoRoadmap,

    /// The referenced item is not in the current collection.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A status change for this item is already outstanding. One transition
    /// per item at a time; other items may transition concurrently.
    #[error("a status change for item {0} is already in flight")]
    TransitionInFlight(String),
}
