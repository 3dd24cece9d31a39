use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use way_core::responses::ExportResponse;
use way_export::{export_filename, plan_workbook, write_workbook};

use crate::cli::{ExportArgs, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way export`.
pub async fn handle(
    args: &ExportArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    ctx.planner.load(&args.roadmap_id).await?;
    let roadmap = ctx
        .planner
        .store()
        .roadmap()
        .cloned()
        .context("roadmap missing after load")?;

    let out_dir = args.out.as_deref().unwrap_or(&ctx.config.export.output_dir);
    let plan = plan_workbook(&roadmap, ctx.config.general.planning_year);
    let path = Path::new(out_dir).join(export_filename(&roadmap.name, Utc::now()));
    write_workbook(&plan, &path)?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            sheets: plan.sheet_names(),
            item_count: roadmap.items.len(),
        },
        format,
    )
}
