use way_core::responses::StatusChangeResponse;

use crate::cli::{OutputFormat, SetStatusArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way set-status`.
///
/// Loads the roadmap first so the transition runs against the current
/// server state, then applies the server-confirmed status change.
pub async fn handle(
    args: &SetStatusArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    ctx.planner.load(&args.roadmap_id).await?;
    let outcome = ctx
        .planner
        .apply_status_change(&args.item_id, args.status.into())
        .await?;

    output(
        &StatusChangeResponse {
            item_id: outcome.item_id,
            from: outcome.from,
            to: outcome.to,
            changed: outcome.changed,
        },
        format,
    )
}
