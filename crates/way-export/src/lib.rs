//! # way-export
//!
//! Multi-sheet spreadsheet export of roadmaps.
//!
//! Losslessly projects a roadmap's nested structure into a flat tabular
//! workbook: an overview sheet, the complete 16-column timeline, one sheet
//! per non-empty display quarter, one per non-empty category, and an
//! analytics summary. Sheet names and column order are part of the export
//! contract and must stay stable; downstream tooling parses them.

pub mod plan;

mod error;
mod filename;
mod writer;

pub use error::ExportError;
pub use filename::export_filename;
pub use plan::{SheetPlan, WorkbookPlan, plan_workbook};
pub use writer::{export_roadmap, write_workbook};
