//! hubmap — sitemap aggregation for the plugin hub.
//!
//! Merges static hub pages from the web build's manifests with plugin and
//! collection pages from the hub API into a single list of sitemap entries,
//! and renders that list as `sitemap.xml`. Also shapes monthly install
//! timelines for the activity dashboard.

pub mod activity;
pub mod error;
pub mod hub_api;
pub mod links;
pub mod manifest;
pub mod sitemap;
pub mod types;

pub use error::{Result, SitemapError};
pub use hub_api::{HubApiClient, HubApiConfig, HubIndex};
pub use manifest::{ManifestReader, NextManifests, StaticManifests};
pub use sitemap::{MemoryLog, SitemapAggregator, SourceLog, TracingLog};
pub use types::{CollectionSummary, EntrySource, PluginSummary, SitemapCategory, SitemapEntry};
