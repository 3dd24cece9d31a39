//! Heuristic wireframe synthesis for planning visualization.
//!
//! Non-AI, deterministic in shape: maintenance items are filtered out, at
//! most the first six remaining items (store order) each become one mock
//! screen with a round-robin device and three fixed components. A planning
//! aid, not a design tool; the effort estimate is a fixed placeholder.

use way_core::entities::{RoadmapItem, WireframeComponent, WireframeScreen};
use way_core::enums::{Category, ComponentKind, DeviceKind};

/// Upper bound on synthesized screens per roadmap.
pub const MAX_SCREENS: usize = 6;

const EFFORT_PLACEHOLDER: &str = "medium";
const BUTTON_LABEL: &str = "View details";

/// Synthesize mock UI screens from the current item collection.
#[must_use]
pub fn synthesize_wireframes(items: &[RoadmapItem]) -> Vec<WireframeScreen> {
    items
        .iter()
        .filter(|i| i.category != Category::Maintenance)
        .take(MAX_SCREENS)
        .enumerate()
        .map(|(index, item)| WireframeScreen {
            item_id: item.id.clone(),
            title: item.title.clone(),
            device: DeviceKind::ROTATION[index % DeviceKind::ROTATION.len()],
            effort_estimate: EFFORT_PLACEHOLDER.to_string(),
            components: vec![
                WireframeComponent {
                    kind: ComponentKind::Header,
                    label: item.title.clone(),
                    detail: None,
                    priority: None,
                },
                WireframeComponent {
                    kind: ComponentKind::Content,
                    label: item.title.clone(),
                    detail: Some(item.description.clone()),
                    priority: Some(item.priority),
                },
                WireframeComponent {
                    kind: ComponentKind::Button,
                    label: BUTTON_LABEL.to_string(),
                    detail: None,
                    priority: None,
                },
            ],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::item;
    use pretty_assertions::assert_eq;
    use way_core::enums::{ItemStatus, Priority};

    #[test]
    fn maintenance_items_are_excluded() {
        let items = vec![
            item("itm-1", "Q1 2024", Category::Strategic, Priority::High, ItemStatus::Proposed),
            item("itm-2", "Q1 2024", Category::Maintenance, Priority::Low, ItemStatus::Completed),
        ];
        let screens = synthesize_wireframes(&items);
        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].item_id, "itm-1");
    }

    #[test]
    fn devices_rotate_and_output_caps_at_six() {
        let items: Vec<_> = (0..9)
            .map(|n| {
                item(
                    &format!("itm-{n}"),
                    "Q1 2024",
                    Category::Innovation,
                    Priority::Medium,
                    ItemStatus::Proposed,
                )
            })
            .collect();
        let screens = synthesize_wireframes(&items);

        assert_eq!(screens.len(), MAX_SCREENS);
        let devices: Vec<DeviceKind> = screens.iter().map(|s| s.device).collect();
        assert_eq!(
            devices,
            [
                DeviceKind::Mobile,
                DeviceKind::Tablet,
                DeviceKind::Desktop,
                DeviceKind::Mobile,
                DeviceKind::Tablet,
                DeviceKind::Desktop,
            ]
        );
    }

    #[test]
    fn each_screen_has_the_three_fixed_components() {
        let items =
            vec![item("itm-1", "Q2 2024", Category::Strategic, Priority::Critical, ItemStatus::Approved)];
        let screens = synthesize_wireframes(&items);

        let kinds: Vec<ComponentKind> =
            screens[0].components.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, [ComponentKind::Header, ComponentKind::Content, ComponentKind::Button]);

        let content = &screens[0].components[1];
        assert_eq!(content.label, "Item itm-1");
        assert_eq!(content.priority, Some(Priority::Critical));
    }
}
