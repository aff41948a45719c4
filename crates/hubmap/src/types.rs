//! Core data model: sitemap entries and the hub index payloads they come from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance tag of a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapCategory {
    Home,
    Plugin,
    Collection,
}

impl fmt::Display for SitemapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Home => "home",
            Self::Plugin => "plugin",
            Self::Collection => "collection",
        };
        f.write_str(s)
    }
}

/// One discoverable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Relative path, or absolute URL once a hostname has been applied.
    pub url: String,
    /// Last-modified hint (ISO-8601, UTC). Only set for plugin entries.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lastmod: Option<String>,
    /// Display label: plugin display name or collection title.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category: SitemapCategory,
}

impl SitemapEntry {
    /// A static hub page.
    pub fn home(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            name: None,
            category: SitemapCategory::Home,
        }
    }

    /// A plugin detail page.
    pub fn plugin(url: impl Into<String>, lastmod: String, name: String) -> Self {
        Self {
            url: url.into(),
            lastmod: Some(lastmod),
            name: Some(name),
            category: SitemapCategory::Plugin,
        }
    }

    /// A collection page.
    pub fn collection(url: impl Into<String>, name: String) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            name: Some(name),
            category: SitemapCategory::Collection,
        }
    }
}

/// Summary row from the plugin index endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSummary {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub release_date: String,
}

/// Summary row from the collections endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub symbol: String,
    pub title: String,
}

/// Which upstream source an entry list (or a failure) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntrySource {
    Manifests,
    PluginIndex,
    CollectionIndex,
}

impl EntrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifests => "manifests",
            Self::PluginIndex => "plugin_index",
            Self::CollectionIndex => "collection_index",
        }
    }
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_like_the_frontend_shape() {
        let entry = SitemapEntry::collection("/collections/seg", "Segmentation".into());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"url": "/collections/seg", "name": "Segmentation", "type": "collection"})
        );
    }

    #[test]
    fn test_plugin_summary_ignores_extra_fields() {
        let raw = r#"{"name":"napari-foo","version":"0.1.0","release_date":"2021-05-04","summary":"x"}"#;
        let plugin: PluginSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(plugin.name, "napari-foo");
        assert!(plugin.display_name.is_none());
    }

    #[test]
    fn test_constructors_tag_category() {
        assert_eq!(SitemapEntry::home("/").category, SitemapCategory::Home);
        assert_eq!(
            SitemapEntry::plugin("/plugins/a", "x".into(), "a".into()).category,
            SitemapCategory::Plugin
        );
        assert_eq!(SitemapCategory::Collection.to_string(), "collection");
    }
}
