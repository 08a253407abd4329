//! Process-wide API configuration
//!
//! Set once in `main`, read-only afterwards. Components never read it
//! directly; `App` turns it into a `ProviderClient` context.

use std::sync::OnceLock;

use provider_search::{ApiConfig, ProviderClient};

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Initialize the API configuration. Call this at startup.
pub fn init_api_config(config: ApiConfig) {
    if API_CONFIG.set(config).is_err() {
        tracing::warn!("API configuration already initialized; keeping the first value");
    }
}

/// Configured API location, or the build-time default if `init_api_config` never ran.
pub fn api_config() -> ApiConfig {
    API_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(ApiConfig::from_build_env)
}

/// Client for the configured backend.
pub fn provider_client() -> ProviderClient {
    ProviderClient::new(api_config())
}
