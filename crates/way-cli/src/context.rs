//! Shared application context for command handlers.

use std::time::Duration;

use way_api::RoadmapClient;
use way_config::WayConfig;
use way_engine::analytics::AnalyticsCache;
use way_engine::planner::Planner;

/// Everything a command handler needs: configuration, the API client, the
/// planning engine, and the memoized analytics cache.
pub struct AppContext {
    pub config: WayConfig,
    pub client: RoadmapClient,
    pub planner: Planner<RoadmapClient>,
    pub analytics: AnalyticsCache,
}

impl AppContext {
    #[must_use]
    pub fn init(config: WayConfig) -> Self {
        let client = RoadmapClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        );
        Self {
            planner: Planner::new(client.clone()),
            analytics: AnalyticsCache::new(),
            client,
            config,
        }
    }

    /// Resolve the project id from a flag or the configured default.
    pub fn project_id(&self, flag: Option<&str>) -> anyhow::Result<String> {
        if let Some(project) = flag {
            return Ok(project.to_string());
        }
        if self.config.general.default_project.is_empty() {
            anyhow::bail!("no project id given and general.default_project is not configured");
        }
        Ok(self.config.general.default_project.clone())
    }
}
