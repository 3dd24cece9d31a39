use crate::cli::{OutputFormat, RoadmapArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way analytics`.
pub async fn handle(
    args: &RoadmapArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    ctx.planner.load(&args.roadmap_id).await?;
    let store = ctx.planner.store();
    let snapshot = ctx.analytics.get_or_compute(store.version(), store.items());
    output(&*snapshot, format)
}
