//! Runtime configuration: flags with environment fallbacks.

use anyhow::{Context, Result};
use clap::Args;
use hubmap::hub_api::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};
use hubmap::manifest::DEFAULT_DIST_DIR;
use hubmap::{HubApiClient, HubApiConfig, NextManifests, SitemapAggregator};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the sources live and how to reach them.
#[derive(Debug, Clone, Args)]
pub struct HubConfig {
    /// Base URL of the hub API.
    #[arg(long, env = "HUB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Build output directory holding the manifests.
    #[arg(long, env = "HUB_DIST_DIR", default_value = DEFAULT_DIST_DIR, global = true)]
    pub dist_dir: PathBuf,

    /// Public origin used to make URLs absolute (e.g. https://napari-hub.org).
    #[arg(long, env = "HUB_HOSTNAME", global = true)]
    pub hostname: Option<String>,

    /// Per-request timeout for hub API calls, in milliseconds.
    #[arg(long, env = "HUB_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS, global = true)]
    pub timeout_ms: u64,
}

impl HubConfig {
    pub fn api_config(&self) -> HubApiConfig {
        HubApiConfig {
            base_url: self.api_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }

    pub fn api_client(&self) -> Result<HubApiClient> {
        HubApiClient::new(&self.api_config())
            .with_context(|| format!("failed to build HTTP client for {}", self.api_url))
    }

    pub fn manifests(&self) -> NextManifests {
        NextManifests::new(&self.dist_dir)
    }

    /// Aggregator wired to the configured sources, logging through `tracing`.
    pub fn aggregator(&self) -> Result<SitemapAggregator> {
        Ok(SitemapAggregator::new(
            Arc::new(self.manifests()),
            Arc::new(self.api_client()?),
        ))
    }
}
