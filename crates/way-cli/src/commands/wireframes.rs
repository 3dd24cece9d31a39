use way_engine::wireframe::synthesize_wireframes;

use crate::cli::{OutputFormat, RoadmapArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way wireframes`.
pub async fn handle(
    args: &RoadmapArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    ctx.planner.load(&args.roadmap_id).await?;
    let screens = synthesize_wireframes(ctx.planner.store().items());
    output(&screens, format)
}
