use way_core::responses::RoadmapListResponse;

use crate::cli::{ListArgs, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way list`.
pub async fn handle(
    args: &ListArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let project_id = ctx.project_id(args.project.as_deref())?;
    let roadmaps = ctx.client.list_roadmaps(&project_id).await?;
    output(&RoadmapListResponse { project_id, roadmaps }, format)
}
