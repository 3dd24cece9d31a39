//! Export filename generation.

use chrono::{DateTime, Utc};

/// Build a unique workbook filename from the roadmap name and a timestamp.
///
/// Non-alphanumeric characters in the name become `_`; the suffix is the
/// ISO-derived UTC second (`YYYY-MM-DDTHH-MM-SSZ`, colons replaced for
/// filesystem safety), so repeated exports of the same roadmap never
/// collide at second granularity.
#[must_use]
pub fn export_filename(roadmap_name: &str, now: DateTime<Utc>) -> String {
    let sanitized: String = roadmap_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let stamp = now.format("%Y-%m-%dT%H-%M-%SZ");
    format!("{sanitized}_roadmap_{stamp}.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn sanitizes_and_stamps() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            export_filename("2024 Platform Roadmap (v2)", now),
            "2024_Platform_Roadmap__v2__roadmap_2024-03-01T12-00-00Z.xlsx"
        );
    }

    #[test]
    fn distinct_timestamps_give_distinct_names() {
        let first = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 1).unwrap();
        assert_ne!(export_filename("Plan", first), export_filename("Plan", second));
    }
}
