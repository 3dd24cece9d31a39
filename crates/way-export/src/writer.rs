//! Workbook rendering via `rust_xlsxwriter`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};

use way_core::entities::Roadmap;

use crate::error::ExportError;
use crate::filename::export_filename;
use crate::plan::{Cell, WorkbookPlan, plan_workbook};

/// Render a plan to an xlsx file at `path`.
///
/// The first row of every sheet is written bold; everything else is plain.
///
/// # Errors
///
/// Returns [`ExportError`] on workbook construction or save failure.
pub fn write_workbook(plan: &WorkbookPlan, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for sheet_plan in &plan.sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&sheet_plan.name)?;
        for (row_idx, row) in sheet_plan.rows.iter().enumerate() {
            let row_idx = u32::try_from(row_idx).unwrap_or(u32::MAX);
            for (col_idx, cell) in row.iter().enumerate() {
                let col_idx = u16::try_from(col_idx).unwrap_or(u16::MAX);
                match cell {
                    Cell::Text(value) if row_idx == 0 => {
                        sheet.write_string_with_format(row_idx, col_idx, value.as_str(), &header)?;
                    }
                    Cell::Text(value) => {
                        sheet.write_string(row_idx, col_idx, value.as_str())?;
                    }
                    Cell::Number(value) => {
                        sheet.write_number(row_idx, col_idx, *value)?;
                    }
                    Cell::Int(value) => {
                        sheet.write_number(row_idx, col_idx, *value as f64)?;
                    }
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Plan, name, and write a roadmap workbook into `output_dir`.
///
/// Returns the full path of the written file.
///
/// # Errors
///
/// Returns [`ExportError`] on workbook or filesystem failure.
pub fn export_roadmap(
    roadmap: &Roadmap,
    output_dir: &Path,
    planning_year: i32,
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let plan = plan_workbook(roadmap, planning_year);
    let path = output_dir.join(export_filename(&roadmap.name, now));
    write_workbook(&plan, &path)?;
    tracing::info!(path = %path.display(), sheets = plan.sheets.len(), "roadmap exported");
    Ok(path)
}
