//! # way-core
//!
//! Core types and error types for Waypoint.
//!
//! This crate provides the foundational types shared across all Waypoint
//! crates:
//! - Entity structs for all domain objects (roadmaps, items, wireframes)
//! - Classification and status enums with fixed display orders
//! - The allocation strategy resolver
//! - Display quarter helpers
//! - CLI response types
//!
//! Failures are domain-specific: `ApiError`, `EngineError`, and
//! `ExportError` live in their respective crates and converge on `anyhow`
//! at the CLI boundary.

pub mod allocation;
pub mod entities;
pub mod enums;
pub mod quarters;
pub mod responses;
