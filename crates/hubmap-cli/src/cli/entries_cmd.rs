//! `hubmap entries` — list every sitemap entry.

use crate::cli::output::{self, Styled};
use crate::config::HubConfig;
use anyhow::Result;
use clap::ValueEnum;
use hubmap::{SitemapCategory, SitemapEntry};
use std::time::Instant;

/// Category filter accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Home,
    Plugin,
    Collection,
}

impl From<CategoryArg> for SitemapCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Home => SitemapCategory::Home,
            CategoryArg::Plugin => SitemapCategory::Plugin,
            CategoryArg::Collection => SitemapCategory::Collection,
        }
    }
}

/// Run the entries command.
pub async fn run(config: &HubConfig, category: Option<CategoryArg>) -> Result<()> {
    let start = Instant::now();
    let aggregator = config.aggregator()?;
    let entries = aggregator.entries(config.hostname.as_deref()).await;
    let entries = filter_category(entries, category.map(Into::into));

    if output::is_json() {
        output::print_json(&serde_json::to_value(&entries)?);
        return Ok(());
    }

    let s = Styled::for_stdout();
    for entry in &entries {
        println!("{}", format_row(&s, entry));
    }

    if !output::is_quiet() {
        eprintln!();
        eprintln!(
            "  {} entries in {:.1}s",
            entries.len(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Keep only entries of `category`, or all of them when it is `None`.
pub fn filter_category(
    entries: Vec<SitemapEntry>,
    category: Option<SitemapCategory>,
) -> Vec<SitemapEntry> {
    match category {
        Some(category) => entries
            .into_iter()
            .filter(|e| e.category == category)
            .collect(),
        None => entries,
    }
}

fn format_row(s: &Styled, entry: &SitemapEntry) -> String {
    let category = s.cyan(&format!("{:<10}", entry.category.to_string()));
    let mut row = format!("{category} {}", entry.url);
    if let Some(name) = &entry.name {
        row.push_str(&format!("  {}", s.dim(name)));
    }
    if output::is_verbose() {
        if let Some(lastmod) = &entry.lastmod {
            row.push_str(&format!("  {}", s.dim(lastmod)));
        }
    }
    row
}
