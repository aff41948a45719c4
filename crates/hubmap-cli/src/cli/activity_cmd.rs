//! `hubmap activity <plugin>` — monthly installs over a fixed window.

use crate::cli::output::{self, Styled};
use crate::config::HubConfig;
use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use hubmap::activity::{align_timeline, total_installs, InstallPoint};
use hubmap::HubIndex;

const BAR_WIDTH: usize = 30;

/// Run the activity command.
pub async fn run(config: &HubConfig, plugin: &str, months: u32) -> Result<()> {
    let client = config.api_client()?;
    let raw = client
        .plugin_activity(plugin, months)
        .await
        .with_context(|| format!("failed to fetch install activity for {plugin}"))?;
    let timeline = align_timeline(&raw, Utc::now(), months);

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "plugin": plugin,
            "months": months,
            "total": total_installs(&timeline),
            "timeline": timeline,
        }));
        return Ok(());
    }

    let s = Styled::new();
    if !output::is_quiet() {
        eprintln!("  {}", s.bold(plugin));
        eprintln!();
    }

    let rows = Styled::for_stdout();
    for line in format_timeline(&rows, &timeline) {
        println!("{line}");
    }

    if !output::is_quiet() {
        eprintln!();
        eprintln!("  Total: {} installs", total_installs(&timeline));
    }

    Ok(())
}

fn format_timeline(s: &Styled, timeline: &[InstallPoint]) -> Vec<String> {
    let max = timeline.iter().map(|p| p.installs).max().unwrap_or(0);

    timeline
        .iter()
        .map(|point| {
            let month = Utc
                .timestamp_millis_opt(point.timestamp)
                .single()
                .map(|dt| dt.format("%Y-%m").to_string())
                .unwrap_or_else(|| "?".to_string());
            format!(
                "  {}  {}  {:>8}",
                s.dim(&month),
                output::bar(point.installs, max, BAR_WIDTH),
                point.installs
            )
        })
        .collect()
}
