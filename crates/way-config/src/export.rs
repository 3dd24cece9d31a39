//! Spreadsheet export configuration.

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory workbooks are written to. Relative paths resolve against
    /// the current working directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, ".");
    }
}
