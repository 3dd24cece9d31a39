use anyhow::Context;

use way_core::responses::RoadmapResponse;

use crate::cli::{OutputFormat, RoadmapArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way show`.
pub async fn handle(
    args: &RoadmapArgs,
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
    output(&RoadmapResponse { roadmap }, format)
}
