//! Webwalk main entry point
//!
//! This is the command-line interface for the webwalk crawler.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use webwalk::config::{load_config, Config};
use webwalk::engine::Crawler;
use webwalk::fetch::HttpFetcher;
use webwalk::report::LogReporter;

/// Webwalk: a concurrent, depth-bounded web crawler
///
/// Webwalk explores the link graph from the configured seed URLs up to a
/// maximum depth, fetching each distinct page at most once per crawl and
/// reporting pages and fetch failures as it goes.
#[derive(Parser, Debug)]
#[command(name = "webwalk")]
#[command(version)]
#[command(about = "A concurrent, depth-bounded web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webwalk=info,warn"),
            1 => EnvFilter::new("webwalk=debug,info"),
            2 => EnvFilter::new("webwalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Webwalk Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    match config.crawler.max_concurrent_fetches {
        Some(limit) => println!("  Max concurrent fetches: {}", limit),
        None => println!("  Max concurrent fetches: unbounded"),
    }

    println!("\nFetch:");
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s", config.fetch.timeout_secs);

    println!("\nSeed URLs ({}):", config.crawler.seeds.len());
    for seed in &config.crawler.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
    let reporter = Arc::new(LogReporter::new());

    let mut crawler = Crawler::new(fetcher, reporter);
    if let Some(limit) = config.crawler.max_concurrent_fetches {
        crawler = crawler.with_fetch_limit(limit);
    }

    for seed in &config.crawler.seeds {
        tracing::info!(
            "Crawling {} to depth {}",
            seed,
            config.crawler.max_depth
        );
        crawler.run(seed, config.crawler.max_depth).await;
    }

    tracing::info!("All crawls completed");
    Ok(())
}
