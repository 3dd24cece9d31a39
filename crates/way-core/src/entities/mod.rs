//! Entity structs for all Waypoint domain objects.
//!
//! Entities mirror the external roadmap API's JSON contract: struct fields
//! serialize in camelCase, enum values in kebab-case. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod item;
mod roadmap;
mod wireframe;

pub use item::{
    BusinessJustification, EstimatedDuration, FeedbackLink, ResourceAllocation, RoadmapItem,
    Timeframe,
};
pub use roadmap::{AllocationSplit, Roadmap};
pub use wireframe::{WireframeComponent, WireframeScreen};
