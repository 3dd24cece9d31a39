//! Command handlers for the `way` binary.

pub mod analytics;
pub mod export;
pub mod generate;
pub mod list;
pub mod set_status;
pub mod show;
pub mod view;
pub mod wireframes;
