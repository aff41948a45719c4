//! hubmap — sitemap tooling for the plugin hub.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hubmap::activity::MAX_MONTHS;
use hubmap_cli::cli;
use hubmap_cli::cli::entries_cmd::CategoryArg;
use hubmap_cli::config::HubConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hubmap", version, about = "Build the plugin hub's sitemap from manifests and the hub API")]
struct Cli {
    #[command(flatten)]
    config: HubConfig,

    /// Machine-readable JSON output.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress and summary lines.
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show extra detail (lastmod, debug logs).
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List aggregated sitemap entries.
    Entries {
        /// Only show entries of this category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Render sitemap.xml.
    Sitemap {
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Render robots.txt.
    Robots {
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show monthly installs for a plugin.
    Activity {
        /// Plugin name.
        plugin: String,
        /// Number of months to show, ending last month.
        #[arg(
            long,
            default_value_t = 12,
            value_parser = clap::value_parser!(u32).range(1..=MAX_MONTHS as i64)
        )]
        months: u32,
    },
    /// Check every sitemap source independently.
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Output helpers read these flags from the environment.
    if cli.json {
        std::env::set_var("HUBMAP_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("HUBMAP_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("HUBMAP_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("HUBMAP_NO_COLOR", "1");
    }

    init_tracing(cli.verbose, cli.log_json);

    match cli.command {
        Command::Entries { category } => cli::entries_cmd::run(&cli.config, category).await,
        Command::Sitemap { output } => cli::sitemap_cmd::run(&cli.config, output.as_deref()).await,
        Command::Robots { output } => cli::robots_cmd::run(&cli.config, output.as_deref()),
        Command::Activity { plugin, months } => {
            cli::activity_cmd::run(&cli.config, &plugin, months).await
        }
        Command::Doctor => cli::doctor::run(&cli.config).await,
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "hubmap=debug" } else { "hubmap=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
