use way_core::allocation::resolve_allocation;
use way_core::entities::AllocationSplit;
use way_core::enums::RoadmapType;
use way_core::responses::RoadmapResponse;

use way_api::GenerateRoadmapRequest;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `way generate`.
pub async fn handle(
    args: &GenerateArgs,
    ctx: &mut AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let project_id = ctx.project_id(args.project.as_deref())?;
    let roadmap_type: RoadmapType = args.roadmap_type.into();

    let custom = match (args.strategic, args.customer_driven, args.maintenance) {
        (Some(strategic), Some(customer_driven), Some(maintenance)) => {
            Some(AllocationSplit { strategic, customer_driven, maintenance })
        }
        (None, None, None) => None,
        _ => anyhow::bail!(
            "custom allocation needs all of --strategic, --customer-driven, --maintenance"
        ),
    };
    let split = resolve_allocation(roadmap_type, custom);

    let request = GenerateRoadmapRequest {
        name: args.name.clone(),
        description: args.description.clone(),
        roadmap_type,
        time_horizon: args.horizon.into(),
        allocation_type: roadmap_type,
        custom_allocation: (roadmap_type == RoadmapType::Custom).then_some(split),
    };
    let roadmap = ctx.client.generate_roadmap(&project_id, &request).await?;
    output(&RoadmapResponse { roadmap }, format)
}
