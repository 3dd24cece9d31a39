//! Display quarter labels for the timeline view and the exporter.

/// The four fixed display quarters for a planning year, in calendar order,
/// e.g. `["Q1 2024", "Q2 2024", "Q3 2024", "Q4 2024"]`.
///
/// The timeline projection and the per-quarter export sheets are restricted
/// to these labels; items carrying any other quarter string are omitted from
/// quarter-keyed views.
#[must_use]
pub fn planning_quarters(year: i32) -> [String; 4] {
    [1, 2, 3, 4].map(|q| format!("Q{q} {year}"))
}
