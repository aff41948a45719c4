//! Route filtering and normalization for manifest-derived pages.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Routes that never belong in the sitemap. Matched anywhere in the route.
static IGNORE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // framework-internal pages
        r"/_app|_error|next",
        // the sitemap and robots files themselves
        r"/sitemap\.xml|robots\.txt",
        // parameterized collection pages
        r"/collections/\[symbol\]",
        // parameterized plugin pages
        r"/plugins/\[name\]",
        // plugin preview
        r"/preview",
        // error pages
        r"/404|500",
        // catch-all MDX pages
        r"/\[\.\.\.parts\]",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("ignore pattern is valid"))
    .collect()
});

const DEFAULT_LOCALE_SEGMENT: &str = "/en/";

/// Whether a route is excluded from the sitemap.
pub fn is_ignored(route: &str) -> bool {
    IGNORE_PATTERNS.iter().any(|re| re.is_match(route))
}

/// Drop the default-locale segment: `/en/team` → `/team`. Only the first
/// occurrence is replaced.
pub fn strip_locale(route: &str) -> String {
    route.replacen(DEFAULT_LOCALE_SEGMENT, "/", 1)
}

/// Filter and normalize routes, keeping the first occurrence of each URL.
pub fn page_urls<I, S>(routes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    routes
        .into_iter()
        .filter(|route| !is_ignored(route.as_ref()))
        .map(|route| strip_locale(route.as_ref()))
        .filter(|url| !url.is_empty() && seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_and_dynamic_routes_ignored() {
        for route in [
            "/_app",
            "/_error",
            "/_next/data",
            "/sitemap.xml",
            "/robots.txt",
            "/collections/[symbol]",
            "/plugins/[name]",
            "/preview",
            "/404",
            "/500",
            "/[...parts]",
            "/en/plugins/[name]",
        ] {
            assert!(is_ignored(route), "{route} should be ignored");
        }
    }

    #[test]
    fn test_regular_pages_kept() {
        for route in ["/", "/about", "/faq", "/collections", "/en/team"] {
            assert!(!is_ignored(route), "{route} should be kept");
        }
    }

    #[test]
    fn test_strip_locale() {
        assert_eq!(strip_locale("/en/team"), "/team");
        assert_eq!(strip_locale("/about"), "/about");
        assert_eq!(strip_locale("/en/en/x"), "/en/x");
    }

    #[test]
    fn test_page_urls_dedupes_after_normalization() {
        let urls = page_urls(["/about", "/_app", "/en/team", "/en/about", "/team"]);
        assert_eq!(urls, vec!["/about", "/team"]);
    }
}
