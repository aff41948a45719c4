//! `hubmap sitemap` — write sitemap.xml.

use crate::cli::output::{self, Styled};
use crate::config::HubConfig;
use anyhow::{Context, Result};
use hubmap::sitemap::xml::render_sitemap_xml;
use std::path::Path;

/// Run the sitemap command. Writes to `out` or stdout.
pub async fn run(config: &HubConfig, out: Option<&Path>) -> Result<()> {
    let s = Styled::new();

    if config.hostname.is_none() && !output::is_quiet() {
        eprintln!(
            "  {} no hostname configured; sitemap URLs will be relative",
            s.warn_sym()
        );
    }

    let entries = config
        .aggregator()?
        .entries(config.hostname.as_deref())
        .await;
    let xml = render_sitemap_xml(&entries).context("failed to render sitemap.xml")?;

    match out {
        Some(path) => {
            write_file(path, &xml)?;
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "entries": entries.len(),
                }));
            } else if !output::is_quiet() {
                eprintln!(
                    "  {} wrote {} entries to {}",
                    s.ok_sym(),
                    entries.len(),
                    path.display()
                );
            }
        }
        None => print!("{xml}"),
    }

    Ok(())
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public/sitemap.xml");
        write_file(&path, "<urlset/>").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<urlset/>");
    }
}
