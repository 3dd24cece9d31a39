use way_core::quarters::planning_quarters;
use way_engine::projector;

use crate::cli::{OutputFormat, ViewArgs, ViewKind};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way view`.
pub async fn handle(
    args: &ViewArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    ctx.planner.load(&args.roadmap_id).await?;
    let items = ctx.planner.store().items();

    match args.view {
        ViewKind::Timeline => {
            let quarters = planning_quarters(ctx.config.general.planning_year).to_vec();
            output(&projector::timeline(items, &quarters), format)
        }
        ViewKind::Kanban => output(&projector::kanban(items), format),
        ViewKind::List => output(&projector::list(items), format),
    }
}
