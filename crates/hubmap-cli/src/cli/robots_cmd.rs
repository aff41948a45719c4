//! `hubmap robots` — print or write robots.txt.

use crate::cli::output::{self, Styled};
use crate::cli::sitemap_cmd::write_file;
use crate::config::HubConfig;
use anyhow::{Context, Result};
use hubmap::sitemap::robots::render_robots_txt;
use std::path::Path;

/// Run the robots command.
pub fn run(config: &HubConfig, out: Option<&Path>) -> Result<()> {
    let txt = render_robots_txt(config.hostname.as_deref())
        .context("failed to render robots.txt")?;

    match out {
        Some(path) => {
            write_file(path, &txt)?;
            if !output::is_quiet() && !output::is_json() {
                let s = Styled::new();
                eprintln!("  {} wrote {}", s.ok_sym(), path.display());
            }
        }
        None => print!("{txt}"),
    }

    Ok(())
}
