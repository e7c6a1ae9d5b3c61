//! Application configuration loaded from environment variables.

use std::env;

use echo_infra::FeedConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub telemetry: TelemetryConfig,
    /// Start the feed with the seed catalog.
    pub seed: bool,
    /// Print view models as JSON instead of text cards.
    pub json_views: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            feed: FeedConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
            seed: flag("FEED_SEED", true),
            json_views: env::var("VIEW_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

/// Boolean env var; anything but `false`/`0` counts as set.
fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v != "false" && v != "0")
        .unwrap_or(default)
}
