//! # way-engine
//!
//! The roadmap planning and visualization engine.
//!
//! Data flows one direction: external API → [`store::ItemStore`] →
//! projections / analytics / wireframes. User status-change actions flow
//! backward through [`planner::Planner`], which confirms every change with
//! the server and re-fetches the whole collection. There is no optimistic
//! local mutation, so the four views can never diverge from the store.

pub mod analytics;
pub mod planner;
pub mod projector;
pub mod store;
pub mod wireframe;

mod error;
mod source;

pub use error::{EngineError, SourceError};
pub use source::RoadmapSource;

#[cfg(test)]
pub(crate) mod test_fixtures;
