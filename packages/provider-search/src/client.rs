//! HTTP client for the provider directory backend.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::types::{ErrorDetail, HealthStatus, ProviderSearchRequest, ProviderSearchResponse};

const SEARCH_PATH: &str = "/api/search/providers";
const HEALTH_PATH: &str = "/api/health";

/// Provider directory API client.
#[derive(Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ProviderClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// One search request. All-or-nothing: any failure yields no providers.
    pub async fn search_providers(
        &self,
        request: &ProviderSearchRequest,
    ) -> Result<ProviderSearchResponse> {
        let url = self.config.endpoint(SEARCH_PATH);
        debug!(%url, limit = ?request.limit, "Searching providers");

        let resp = self.client.post(&url).json(request).send().await?;
        let response: ProviderSearchResponse = read_json(resp).await?;

        debug!(count = response.providers.len(), "Provider search returned");
        Ok(response)
    }

    /// Backend liveness probe.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);
        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorDetail>(&body)
            .ok()
            .and_then(|d| d.message())
            .unwrap_or_else(|| body.trim().to_string());
        warn!(status = status.as_u16(), %message, "Provider API returned an error");
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
