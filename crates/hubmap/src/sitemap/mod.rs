//! Sitemap aggregation.
//!
//! Collects indexable URLs from three independent sources:
//!
//! 1. the build and pre-render manifests (static hub pages),
//! 2. the plugin index API,
//! 3. the collections API.
//!
//! Each source degrades to an empty list on failure; the failure goes to the
//! aggregator's [`SourceLog`]. The combined list is ordered home, plugin,
//! collection and is never de-duplicated across categories.

pub mod filter;
pub mod robots;
pub mod xml;

use crate::error::{Result, SitemapError};
use crate::hub_api::HubIndex;
use crate::links::{join_url, parse_base, to_lastmod};
use crate::manifest::ManifestReader;
use crate::types::{EntrySource, SitemapEntry};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// Receives source failures. The aggregator never surfaces them otherwise.
pub trait SourceLog: Send + Sync {
    /// A source failed and contributes no entries.
    fn source_failed(&self, source: EntrySource, error: &SitemapError);

    /// URLs could not be made absolute against `hostname`.
    fn rewrite_failed(&self, hostname: &str, error: &SitemapError);
}

/// Logs failures through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl SourceLog for TracingLog {
    fn source_failed(&self, source: EntrySource, err: &SitemapError) {
        error!(source = %source, error = %err, "{}", failure_message(source));
    }

    fn rewrite_failed(&self, hostname: &str, err: &SitemapError) {
        error!(hostname, error = %err, "unable to build absolute sitemap urls");
    }
}

/// One recorded failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// `None` for hostname rewrite failures.
    pub source: Option<EntrySource>,
    pub message: String,
}

/// Keeps failures in memory so callers can inspect them after aggregation.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Whether `source` reported a failure.
    pub fn failed(&self, source: EntrySource) -> bool {
        self.records().iter().any(|r| r.source == Some(source))
    }

    fn push(&self, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

impl SourceLog for MemoryLog {
    fn source_failed(&self, source: EntrySource, err: &SitemapError) {
        self.push(LogRecord {
            source: Some(source),
            message: format!("{}: {err}", failure_message(source)),
        });
    }

    fn rewrite_failed(&self, hostname: &str, err: &SitemapError) {
        self.push(LogRecord {
            source: None,
            message: format!("unable to build absolute urls for {hostname}: {err}"),
        });
    }
}

fn failure_message(source: EntrySource) -> &'static str {
    match source {
        EntrySource::Manifests => "unable to read build manifests",
        EntrySource::PluginIndex => "unable to fetch plugin list",
        EntrySource::CollectionIndex => "unable to fetch collection list",
    }
}

/// Builds the full list of sitemap entries from its collaborators.
#[derive(Clone)]
pub struct SitemapAggregator {
    manifests: Arc<dyn ManifestReader>,
    hub: Arc<dyn HubIndex>,
    log: Arc<dyn SourceLog>,
}

impl SitemapAggregator {
    /// Create an aggregator that logs through `tracing`.
    pub fn new(manifests: Arc<dyn ManifestReader>, hub: Arc<dyn HubIndex>) -> Self {
        Self {
            manifests,
            hub,
            log: Arc::new(TracingLog),
        }
    }

    /// Replace the failure log.
    pub fn with_log(mut self, log: Arc<dyn SourceLog>) -> Self {
        self.log = log;
        self
    }

    /// All entries: home, then plugin, then collection. Relative URLs are
    /// resolved against `hostname` when one is given.
    ///
    /// Never fails. A broken source contributes nothing.
    pub async fn entries(&self, hostname: Option<&str>) -> Vec<SitemapEntry> {
        let (home, plugins, collections) = tokio::join!(
            async { self.home_entries() },
            self.plugin_entries(),
            self.collection_entries(),
        );

        info!(
            home = home.len(),
            plugins = plugins.len(),
            collections = collections.len(),
            "aggregated sitemap entries"
        );

        let mut entries = home;
        entries.extend(plugins);
        entries.extend(collections);

        if let Some(hostname) = hostname {
            self.absolutize(&mut entries, hostname);
        }
        entries
    }

    /// Static hub pages from the manifests, or nothing if they can't be read.
    pub fn home_entries(&self) -> Vec<SitemapEntry> {
        self.recover(EntrySource::Manifests, self.try_home_entries())
    }

    /// Plugin pages from the plugin index, or nothing if the fetch fails.
    pub async fn plugin_entries(&self) -> Vec<SitemapEntry> {
        let result = self.try_plugin_entries().await;
        self.recover(EntrySource::PluginIndex, result)
    }

    /// Collection pages from the collections index, or nothing if the fetch
    /// fails.
    pub async fn collection_entries(&self) -> Vec<SitemapEntry> {
        let result = self.try_collection_entries().await;
        self.recover(EntrySource::CollectionIndex, result)
    }

    /// Home entries, propagating manifest errors.
    pub fn try_home_entries(&self) -> Result<Vec<SitemapEntry>> {
        let mut routes = self.manifests.build_routes()?;
        routes.extend(self.manifests.prerender_routes()?);

        Ok(filter::page_urls(routes)
            .into_iter()
            .map(SitemapEntry::home)
            .collect())
    }

    /// Plugin entries, propagating fetch and date errors.
    pub async fn try_plugin_entries(&self) -> Result<Vec<SitemapEntry>> {
        let plugins = self.hub.plugin_index().await?;

        plugins
            .into_iter()
            .map(|plugin| {
                let lastmod = to_lastmod(&plugin.release_date)?;
                let url = format!("/plugins/{}", plugin.name);
                let name = plugin.display_name.unwrap_or(plugin.name);
                Ok(SitemapEntry::plugin(url, lastmod, name))
            })
            .collect()
    }

    /// Collection entries, propagating fetch errors.
    pub async fn try_collection_entries(&self) -> Result<Vec<SitemapEntry>> {
        let collections = self.hub.collections_index().await?;

        Ok(collections
            .into_iter()
            .map(|c| SitemapEntry::collection(format!("/collections/{}", c.symbol), c.title))
            .collect())
    }

    fn recover(&self, source: EntrySource, result: Result<Vec<SitemapEntry>>) -> Vec<SitemapEntry> {
        result.unwrap_or_else(|err| {
            self.log.source_failed(source, &err);
            Vec::new()
        })
    }

    /// Rewrite every URL in place against `hostname`. An unusable hostname
    /// leaves the URLs relative.
    fn absolutize(&self, entries: &mut [SitemapEntry], hostname: &str) {
        let base = match parse_base(hostname) {
            Ok(base) => base,
            Err(err) => {
                self.log.rewrite_failed(hostname, &err);
                return;
            }
        };

        for entry in entries.iter_mut() {
            match join_url(&base, &entry.url) {
                Ok(url) => entry.url = url.into(),
                Err(err) => self.log.rewrite_failed(hostname, &err),
            }
        }
    }
}
