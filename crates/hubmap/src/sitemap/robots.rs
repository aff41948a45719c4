//! robots.txt rendering.

use crate::error::Result;
use crate::links::create_url;

/// Render a permissive robots.txt. When a hostname is known, the file points
/// crawlers at `{hostname}/sitemap.xml`.
pub fn render_robots_txt(hostname: Option<&str>) -> Result<String> {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    if let Some(hostname) = hostname {
        let sitemap = create_url("/sitemap.xml", hostname)?;
        out.push_str(&format!("\nSitemap: {sitemap}\n"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_with_hostname() {
        let txt = render_robots_txt(Some("https://example.org")).unwrap();
        assert_eq!(
            txt,
            "User-agent: *\nAllow: /\n\nSitemap: https://example.org/sitemap.xml\n"
        );
    }

    #[test]
    fn test_robots_without_hostname() {
        let txt = render_robots_txt(None).unwrap();
        assert!(!txt.contains("Sitemap:"));
        assert!(txt.starts_with("User-agent: *"));
    }

    #[test]
    fn test_robots_invalid_hostname() {
        assert!(render_robots_txt(Some("not a url")).is_err());
    }
}
