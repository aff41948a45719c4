//! URL and timestamp helpers shared by the sitemap sources.

use crate::error::{Result, SitemapError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use url::Url;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Resolve `relative` against `hostname`, the same way a browser resolves
/// a link against a base URL.
pub fn create_url(relative: &str, hostname: &str) -> Result<Url> {
    let base = parse_base(hostname)?;
    join_url(&base, relative)
}

/// Parse a hostname such as `https://example.org` into a base URL.
pub fn parse_base(hostname: &str) -> Result<Url> {
    Url::parse(hostname).map_err(|source| SitemapError::InvalidUrl {
        input: hostname.to_string(),
        source,
    })
}

/// Resolve `relative` against an already parsed base.
pub fn join_url(base: &Url, relative: &str) -> Result<Url> {
    base.join(relative).map_err(|source| SitemapError::InvalidUrl {
        input: relative.to_string(),
        source,
    })
}

/// Convert a release date into an ISO-8601 UTC timestamp with millisecond
/// precision, e.g. `2020-01-01` → `2020-01-01T00:00:00.000Z`.
///
/// Date-times without an offset are read as UTC.
pub fn to_lastmod(date: &str) -> Result<String> {
    parse_release_date(date)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| SitemapError::InvalidDate(date.to_string()))
}

/// Parse a release date in any of the formats the hub API has emitted.
pub fn parse_release_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(date, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_url_absolute_path() {
        let url = create_url("/plugins/foo", "https://example.org").unwrap();
        assert_eq!(url.as_str(), "https://example.org/plugins/foo");
    }

    #[test]
    fn test_create_url_replaces_base_path() {
        let url = create_url("/about", "https://example.org/some/base").unwrap();
        assert_eq!(url.as_str(), "https://example.org/about");
    }

    #[test]
    fn test_create_url_invalid_hostname() {
        let err = create_url("/about", "example.org").unwrap_err();
        assert!(matches!(err, SitemapError::InvalidUrl { .. }));
    }

    #[test]
    fn test_to_lastmod_plain_date() {
        assert_eq!(to_lastmod("2020-01-01").unwrap(), "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_to_lastmod_with_offset() {
        assert_eq!(
            to_lastmod("2021-06-15T12:30:00+02:00").unwrap(),
            "2021-06-15T10:30:00.000Z"
        );
    }

    #[test]
    fn test_to_lastmod_naive_datetime() {
        assert_eq!(
            to_lastmod("2021-03-04T10:20:30").unwrap(),
            "2021-03-04T10:20:30.000Z"
        );
        assert_eq!(
            to_lastmod("2021-03-04 10:20:30").unwrap(),
            "2021-03-04T10:20:30.000Z"
        );
    }

    #[test]
    fn test_to_lastmod_rejects_garbage() {
        assert!(matches!(
            to_lastmod("last tuesday"),
            Err(SitemapError::InvalidDate(_))
        ));
    }
}
