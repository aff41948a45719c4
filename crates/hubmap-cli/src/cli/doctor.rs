//! `hubmap doctor` — probe each sitemap source on its own.
//!
//! Reports what the aggregator would see without folding failures into an
//! empty list, so a degraded sitemap can be traced to its cause.

use crate::cli::output::{self, Styled};
use crate::config::HubConfig;
use anyhow::Result;
use hubmap::links::parse_base;
use hubmap::ManifestReader;

/// Outcome of one check.
#[derive(Debug, Clone)]
struct Check {
    name: &'static str,
    ok: bool,
    value: String,
    fix: Option<String>,
}

/// Run all checks and report.
pub async fn run(config: &HubConfig) -> Result<()> {
    let checks = collect(config).await?;

    if output::is_json() {
        let items: Vec<_> = checks
            .iter()
            .map(|c| {
                serde_json::json!({
                    "check": c.name,
                    "ok": c.ok,
                    "value": c.value,
                    "fix": c.fix,
                })
            })
            .collect();
        output::print_json(&serde_json::json!({
            "healthy": checks.iter().all(|c| c.ok),
            "checks": items,
        }));
        return Ok(());
    }

    let s = Styled::new();
    output::print_header(&s);
    output::print_section(&s, "Sources");

    for check in &checks {
        let sym = if check.ok { s.ok_sym() } else { s.fail_sym() };
        output::print_check(sym, &format!("{}:", check.name), &check.value);
        if let Some(fix) = &check.fix {
            output::print_detail(&s.yellow(fix));
        }
    }

    let failed = checks.iter().filter(|c| !c.ok).count();
    if failed == 0 {
        output::print_status(&s, &s.green("healthy"), "all sources reachable");
    } else {
        output::print_status(
            &s,
            &s.red("degraded"),
            &format!("{failed} of {} checks failed", checks.len()),
        );
    }

    Ok(())
}

async fn collect(config: &HubConfig) -> Result<Vec<Check>> {
    let manifests = config.manifests();
    let aggregator = config.aggregator()?;
    let mut checks = Vec::new();

    checks.push(match manifests.build_routes() {
        Ok(routes) => ok("Build manifest", format!("{} routes", routes.len())),
        Err(e) => fail(
            "Build manifest",
            e.to_string(),
            format!(
                "run the web build or point --dist-dir at its output (now {})",
                manifests.dist_dir().display()
            ),
        ),
    });

    checks.push(match manifests.prerender_routes() {
        Ok(routes) => ok("Pre-render manifest", format!("{} routes", routes.len())),
        Err(e) => fail(
            "Pre-render manifest",
            e.to_string(),
            "run the web build so static pages are pre-rendered".to_string(),
        ),
    });

    checks.push(match aggregator.try_home_entries() {
        Ok(entries) => ok("Home pages", format!("{} indexable", entries.len())),
        Err(e) => fail("Home pages", e.to_string(), "fix the manifests above".to_string()),
    });

    let (plugins, collections) = tokio::join!(
        aggregator.try_plugin_entries(),
        aggregator.try_collection_entries()
    );

    checks.push(match plugins {
        Ok(entries) => ok("Plugin index", format!("{} plugins", entries.len())),
        Err(e) => fail(
            "Plugin index",
            e.to_string(),
            format!("check that {} is reachable", config.api_url),
        ),
    });

    checks.push(match collections {
        Ok(entries) => ok("Collection index", format!("{} collections", entries.len())),
        Err(e) => fail(
            "Collection index",
            e.to_string(),
            format!("check that {} is reachable", config.api_url),
        ),
    });

    checks.push(match config.hostname.as_deref() {
        None => ok("Hostname", "not set (relative URLs)".to_string()),
        Some(hostname) => match parse_base(hostname) {
            Ok(url) => ok("Hostname", url.to_string()),
            Err(e) => fail(
                "Hostname",
                e.to_string(),
                "use a full origin such as https://napari-hub.org".to_string(),
            ),
        },
    });

    Ok(checks)
}

fn ok(name: &'static str, value: String) -> Check {
    Check {
        name,
        ok: true,
        value,
        fix: None,
    }
}

fn fail(name: &'static str, value: String, fix: String) -> Check {
    Check {
        name,
        ok: false,
        value,
        fix: Some(fix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: HubConfig,
    }

    #[tokio::test]
    async fn test_collect_reports_missing_manifests_and_bad_hostname() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().to_str().unwrap();
        let cli = TestCli::try_parse_from([
            "hubmap",
            "--dist-dir",
            dist,
            "--api-url",
            "http://127.0.0.1:1",
            "--timeout-ms",
            "300",
            "--hostname",
            "napari-hub.org",
        ])
        .unwrap();

        let checks = collect(&cli.config).await.unwrap();
        let by_name = |name: &str| checks.iter().find(|c| c.name == name).unwrap().clone();

        assert!(!by_name("Build manifest").ok);
        assert!(!by_name("Home pages").ok);
        assert!(!by_name("Plugin index").ok);
        assert!(!by_name("Collection index").ok);
        assert!(!by_name("Hostname").ok);
        assert!(by_name("Build manifest").fix.is_some());
    }
}
