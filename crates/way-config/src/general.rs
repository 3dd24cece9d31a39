//! General application configuration.

use serde::{Deserialize, Serialize};

/// Planning year backing the fixed `Q1..Q4` display quarters.
const fn default_planning_year() -> i32 {
    2024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Year used to build the display quarter labels (`Q1 <year>` ..
    /// `Q4 <year>`) for the timeline view and per-quarter export sheets.
    #[serde(default = "default_planning_year")]
    pub planning_year: i32,

    /// Project to use when no `--project` flag is given.
    #[serde(default)]
    pub default_project: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            planning_year: default_planning_year(),
            default_project: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.planning_year, 2024);
        assert!(config.default_project.is_empty());
    }
}
