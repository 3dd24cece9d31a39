//! Roadmap API client configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

/// HTTP request timeout in seconds. Transitions have no engine-level
/// timeout beyond this transport one.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the roadmap REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout applied to the reqwest client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001/api");
        assert_eq!(config.timeout_secs, 10);
    }
}
