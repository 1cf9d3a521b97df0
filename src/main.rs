//! Contact-Scout main entry point
//!
//! This is the command-line interface for the Contact-Scout page scraper.

use anyhow::Context;
use clap::Parser;
use contact_scout::output::render_json;
use contact_scout::{FetchMode, Scraper};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Contact-Scout: contact metadata from a single web page
///
/// Fetches the page at URL and prints its title, description, favicon,
/// emails, phone numbers and social links as JSON. When the page cannot be
/// fetched directly, the third-party scraping API is queried instead.
#[derive(Parser, Debug)]
#[command(name = "contact-scout")]
#[command(version)]
#[command(about = "Extract contact metadata from a web page", long_about = None)]
struct Cli {
    /// Page to scrape; `https://` is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: String,

    /// Skip the direct fetch and use the third-party scraping API only
    #[arg(long)]
    fallback: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let scraper = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            Scraper::from_config_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Scraper::default(),
    };
    let outcome = scraper
        .scrape(&cli.url, FetchMode::from_flag(cli.fallback))
        .await;

    println!(
        "{}",
        render_json(&outcome, cli.compact).context("failed to serialize result")?
    );

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the JSON result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_scout=info,warn"),
            1 => EnvFilter::new("contact_scout=debug,info"),
            2 => EnvFilter::new("contact_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
