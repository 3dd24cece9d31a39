//! Pure workbook planning.
//!
//! The exporter is split in two: this module projects a roadmap into a
//! [`WorkbookPlan`], an ordered list of named sheets holding typed cells,
//! and `writer` renders a plan to xlsx. Sheet names and column order are
//! part of the export contract and must stay stable across versions;
//! downstream spreadsheet tooling parses them.

use way_core::entities::{Roadmap, RoadmapItem};
use way_core::enums::Category;
use way_core::quarters::planning_quarters;
use way_engine::analytics::compute_analytics;

/// A single planned cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Int(i64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// One sheet: a stable name and its rows. The first row of every sheet is
/// a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// The full deterministic sheet set for one roadmap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookPlan {
    pub sheets: Vec<SheetPlan>,
}

impl WorkbookPlan {
    /// Sheet names in workbook order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }
}

/// Column headers of the `Complete Timeline` sheet (16 columns).
pub const TIMELINE_COLUMNS: [&str; 16] = [
    "Quarter",
    "Title",
    "Description",
    "Category",
    "Priority",
    "Status",
    "Duration",
    "Team Members",
    "Cost",
    "Strategic Alignment",
    "Customer Impact",
    "Revenue Impact",
    "Risk Level",
    "Success Metrics",
    "Dependencies",
    "Customer Quotes",
];

/// Column headers of the per-quarter sheets (9 columns).
pub const QUARTER_COLUMNS: [&str; 9] = [
    "Title",
    "Description",
    "Category",
    "Priority",
    "Status",
    "Duration",
    "Team Members",
    "Cost",
    "Risk Level",
];

/// Column headers of the per-category sheets (12 columns).
pub const CATEGORY_COLUMNS: [&str; 12] = [
    "Quarter",
    "Title",
    "Description",
    "Priority",
    "Status",
    "Duration",
    "Team Members",
    "Cost",
    "Strategic Alignment",
    "Customer Impact",
    "Revenue Impact",
    "Risk Level",
];

/// Project a roadmap into its workbook plan.
///
/// Sheet order: `Overview`, `Complete Timeline`, one sheet per non-empty
/// display quarter of `planning_year` (calendar order), one sheet per
/// non-empty category (declaration order), `Analytics`.
#[must_use]
pub fn plan_workbook(roadmap: &Roadmap, planning_year: i32) -> WorkbookPlan {
    let mut sheets = vec![overview_sheet(roadmap), timeline_sheet(roadmap)];

    for quarter in planning_quarters(planning_year) {
        let in_quarter: Vec<&RoadmapItem> = roadmap
            .items
            .iter()
            .filter(|i| i.timeframe.quarter == quarter)
            .collect();
        if !in_quarter.is_empty() {
            sheets.push(quarter_sheet(&quarter, &in_quarter));
        }
    }

    for category in Category::ALL {
        let in_category: Vec<&RoadmapItem> =
            roadmap.items.iter().filter(|i| i.category == category).collect();
        if !in_category.is_empty() {
            sheets.push(category_sheet(category, &in_category));
        }
    }

    sheets.push(analytics_sheet(roadmap));
    WorkbookPlan { sheets }
}

fn overview_sheet(roadmap: &Roadmap) -> SheetPlan {
    let allocation = roadmap.allocation_strategy;
    let pair = |field: &str, value: Cell| vec![Cell::text(field), value];
    let rows = vec![
        vec![Cell::text("Field"), Cell::text("Value")],
        pair("Name", Cell::text(&roadmap.name)),
        pair("Description", Cell::text(&roadmap.description)),
        pair("Type", Cell::text(roadmap.roadmap_type.as_str())),
        pair("Time Horizon", Cell::text(roadmap.time_horizon.as_str())),
        pair("Created", Cell::text(roadmap.created_at.to_rfc3339())),
        pair("Updated", Cell::text(roadmap.updated_at.to_rfc3339())),
        pair("Item Count", Cell::Int(roadmap.items.len() as i64)),
        pair("Strategic Allocation %", Cell::Int(i64::from(allocation.strategic))),
        pair(
            "Customer-Driven Allocation %",
            Cell::Int(i64::from(allocation.customer_driven)),
        ),
        pair("Maintenance Allocation %", Cell::Int(i64::from(allocation.maintenance))),
    ];
    SheetPlan { name: "Overview".into(), rows }
}

fn timeline_sheet(roadmap: &Roadmap) -> SheetPlan {
    let mut rows = vec![header_row(&TIMELINE_COLUMNS)];
    rows.extend(roadmap.items.iter().map(timeline_row));
    SheetPlan { name: "Complete Timeline".into(), rows }
}

fn timeline_row(item: &RoadmapItem) -> Vec<Cell> {
    let justification = item.business_justification;
    vec![
        Cell::text(&item.timeframe.quarter),
        Cell::text(&item.title),
        Cell::text(&item.description),
        Cell::text(item.category.as_str()),
        Cell::text(item.priority.as_str()),
        Cell::text(item.status.as_str()),
        Cell::text(item.timeframe.estimated_duration.label()),
        Cell::Int(i64::from(item.resource_allocation.team_members)),
        Cell::Number(item.resource_allocation.estimated_cost),
        Cell::Int(justification.strategic_alignment),
        Cell::Int(justification.customer_impact),
        Cell::Int(justification.revenue_impact),
        Cell::text(justification.risk_level.as_str()),
        Cell::text(item.success_metrics.join(";")),
        Cell::text(item.dependencies.join(";")),
        Cell::text(joined_quotes(item)),
    ]
}

/// Quotes join `;` within one feedback entry and `|` across entries.
fn joined_quotes(item: &RoadmapItem) -> String {
    item.related_feedback
        .iter()
        .map(|f| f.customer_quotes.join(";"))
        .collect::<Vec<_>>()
        .join("|")
}

fn quarter_sheet(quarter: &str, items: &[&RoadmapItem]) -> SheetPlan {
    let mut rows = vec![header_row(&QUARTER_COLUMNS)];
    rows.extend(items.iter().map(|item| {
        vec![
            Cell::text(&item.title),
            Cell::text(&item.description),
            Cell::text(item.category.as_str()),
            Cell::text(item.priority.as_str()),
            Cell::text(item.status.as_str()),
            Cell::text(item.timeframe.estimated_duration.label()),
            Cell::Int(i64::from(item.resource_allocation.team_members)),
            Cell::Number(item.resource_allocation.estimated_cost),
            Cell::text(item.business_justification.risk_level.as_str()),
        ]
    }));
    SheetPlan { name: quarter.to_string(), rows }
}

fn category_sheet(category: Category, items: &[&RoadmapItem]) -> SheetPlan {
    let mut rows = vec![header_row(&CATEGORY_COLUMNS)];
    rows.extend(items.iter().map(|item| {
        let justification = item.business_justification;
        vec![
            Cell::text(&item.timeframe.quarter),
            Cell::text(&item.title),
            Cell::text(&item.description),
            Cell::text(item.priority.as_str()),
            Cell::text(item.status.as_str()),
            Cell::text(item.timeframe.estimated_duration.label()),
            Cell::Int(i64::from(item.resource_allocation.team_members)),
            Cell::Number(item.resource_allocation.estimated_cost),
            Cell::Int(justification.strategic_alignment),
            Cell::Int(justification.customer_impact),
            Cell::Int(justification.revenue_impact),
            Cell::text(justification.risk_level.as_str()),
        ]
    }));
    SheetPlan { name: category.as_str().to_string(), rows }
}

fn analytics_sheet(roadmap: &Roadmap) -> SheetPlan {
    let snapshot = compute_analytics(&roadmap.items);
    let mut rows = vec![vec![Cell::text("Metric"), Cell::text("Value")]];

    rows.push(vec![Cell::text("Status Overview")]);
    for entry in &snapshot.status_overview {
        rows.push(vec![Cell::text(entry.status.as_str()), Cell::Int(entry.count as i64)]);
    }

    rows.push(vec![Cell::text("Priority Breakdown")]);
    for entry in &snapshot.priority_breakdown {
        rows.push(vec![Cell::text(entry.priority.as_str()), Cell::Int(entry.count as i64)]);
    }

    rows.push(vec![Cell::text("Category Distribution")]);
    for entry in &snapshot.category_distribution {
        rows.push(vec![Cell::text(entry.category.as_str()), Cell::Int(entry.count as i64)]);
    }

    let total_team: u64 = roadmap
        .items
        .iter()
        .map(|i| u64::from(i.resource_allocation.team_members))
        .sum();
    let total_cost: f64 =
        roadmap.items.iter().map(|i| i.resource_allocation.estimated_cost).sum();

    rows.push(vec![Cell::text("Resource Totals")]);
    rows.push(vec![Cell::text("Total Team Members"), Cell::Int(total_team as i64)]);
    rows.push(vec![Cell::text("Total Cost"), Cell::Number(total_cost)]);
    rows.push(vec![
        Cell::text("Average Team Size"),
        guarded_average(total_team as f64, roadmap.items.len()),
    ]);
    rows.push(vec![
        Cell::text("Average Cost per Item"),
        guarded_average(total_cost, roadmap.items.len()),
    ]);

    SheetPlan { name: "Analytics".into(), rows }
}

/// Average over the item count, guarded against a zero-item roadmap:
/// renders `N/A` instead of NaN/Infinity.
fn guarded_average(total: f64, count: usize) -> Cell {
    if count == 0 {
        Cell::text("N/A")
    } else {
        Cell::Number(total / count as f64)
    }
}

fn header_row(columns: &[&str]) -> Vec<Cell> {
    columns.iter().map(|c| Cell::text(*c)).collect()
}
