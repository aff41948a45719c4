//! Client for the hub's read-only index endpoints.

use crate::activity::InstallPoint;
use crate::error::{Result, SitemapError};
use crate::types::{CollectionSummary, PluginSummary};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Production API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.napari-hub.org";
/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Remote listings of publishable entities.
#[async_trait]
pub trait HubIndex: Send + Sync {
    /// Every public plugin, in index order.
    async fn plugin_index(&self) -> Result<Vec<PluginSummary>>;

    /// Every collection, in index order.
    async fn collections_index(&self) -> Result<Vec<CollectionSummary>>;

    /// Monthly install counts for one plugin over the last `months` months.
    async fn plugin_activity(&self, name: &str, months: u32) -> Result<Vec<InstallPoint>>;
}

/// Connection settings for [`HubApiClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for HubApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// `reqwest`-backed [`HubIndex`].
#[derive(Debug, Clone)]
pub struct HubApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct MetricsPayload {
    #[serde(default)]
    usage: UsagePayload,
}

#[derive(Debug, Default, Deserialize)]
struct UsagePayload {
    #[serde(default)]
    timeline: Vec<InstallPoint>,
}

impl HubApiClient {
    pub fn new(config: &HubApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("hubmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SitemapError::Http {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "fetching hub endpoint");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SitemapError::Http {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SitemapError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|source| SitemapError::Http {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|e| SitemapError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl HubIndex for HubApiClient {
    async fn plugin_index(&self) -> Result<Vec<PluginSummary>> {
        self.get_json("/plugins/index").await
    }

    async fn collections_index(&self) -> Result<Vec<CollectionSummary>> {
        self.get_json("/collections").await
    }

    async fn plugin_activity(&self, name: &str, months: u32) -> Result<Vec<InstallPoint>> {
        let payload: MetricsPayload = self
            .get_json(&format!("/metrics/{name}?limit={months}"))
            .await?;
        Ok(payload.usage.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let cfg = HubApiConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_API_URL);
        assert_eq!(cfg.timeout_ms, 10_000);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HubApiClient::new(&HubApiConfig {
            base_url: "http://localhost:9000/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_metrics_payload_tolerates_missing_usage() {
        let payload: MetricsPayload = serde_json::from_str(r#"{"maintenance": {}}"#).unwrap();
        assert!(payload.usage.timeline.is_empty());
    }
}
