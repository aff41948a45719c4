//! Error types for sitemap sources.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for hubmap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Errors raised while reading or fetching a sitemap source.
///
/// None of these escape [`SitemapAggregator::entries`](crate::SitemapAggregator::entries);
/// a failing source is logged and contributes nothing.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// A manifest file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest file is not valid JSON.
    #[error("malformed manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level HTTP failure.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The hub API answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("unexpected payload from {url}: {message}")]
    Decode { url: String, message: String },

    /// A string could not be parsed as a URL.
    #[error("invalid url {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// A release date could not be interpreted.
    #[error("invalid date {0:?}")]
    InvalidDate(String),

    /// XML serialization failed.
    #[error("xml error: {0}")]
    Xml(String),
}
