use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ComponentKind, DeviceKind, Priority};

/// A synthesized mock UI screen for a roadmap item.
///
/// Derived, non-persistent: regenerated on demand from the current item set
/// and discarded when the roadmap selection changes. The effort estimate is
/// an illustrative placeholder, not computed from item complexity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireframeScreen {
    pub item_id: String,
    pub title: String,
    pub device: DeviceKind,
    pub effort_estimate: String,
    pub components: Vec<WireframeComponent>,
}

/// One component of a synthesized wireframe screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireframeComponent {
    pub kind: ComponentKind,
    pub label: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}
