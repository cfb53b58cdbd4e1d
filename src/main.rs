//! Parasync-Scraper main entry point
//!
//! This is the command-line interface for the Parasync-Scraper page summary scraper.

use anyhow::Context;
use clap::Parser;
use parasync_scraper::config::{load_config_with_hash, Config};
use parasync_scraper::input::read_urls;
use parasync_scraper::output::{print_statistics, write_results, RunStatistics};
use parasync_scraper::Scraper;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Parasync-Scraper: a concurrent page summary scraper
///
/// Reads URLs (one per line), fetches them with a bounded pool of workers and
/// writes each page's title, meta description and h1 headings as JSON.
#[derive(Parser, Debug)]
#[command(name = "parasync-scraper")]
#[command(version)]
#[command(about = "A concurrent page summary scraper", long_about = None)]
struct Cli {
    /// Path to input file with URLs (one per line)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Path to output file for results [default: result/output.json]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum number of concurrent workers [default: 5]
    #[arg(short, long)]
    workers: Option<usize>,

    /// HTTP request timeout in seconds [default: 30]
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum number of retry attempts [default: 3]
    #[arg(short, long)]
    retries: Option<u32>,

    /// Optional TOML configuration file; flags override its values
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.path = output.display().to_string();
        }
        if let Some(workers) = self.workers {
            config.scraper.max_workers = workers;
        }
        if let Some(timeout) = self.timeout {
            config.scraper.timeout_secs = timeout;
        }
        if let Some(retries) = self.retries {
            config.scraper.max_retries = retries;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };
    cli.apply_overrides(&mut config);

    parasync_scraper::config::validate(&config).context("invalid configuration")?;

    run(&cli, config, config_hash.as_deref()).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("parasync_scraper=info,warn"),
            1 => EnvFilter::new("parasync_scraper=debug,info"),
            2 => EnvFilter::new("parasync_scraper=trace,debug"),
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

/// Reads URLs, scrapes them and writes the results
async fn run(cli: &Cli, config: Config, config_hash: Option<&str>) -> anyhow::Result<()> {
    let urls = read_urls(&cli.input).context("error reading URLs")?;
    tracing::info!("Loaded {} URLs from {}", urls.len(), cli.input.display());

    let scraper =
        Scraper::new(config.scraper.to_scraper_config()).context("error creating scraper")?;

    let results = scraper.scrape(urls).await.context("error scraping URLs")?;

    let output_path = PathBuf::from(&config.output.path);
    write_results(&results, &output_path).context("error writing results")?;

    let stats = RunStatistics::from_results(&results);
    tracing::info!(
        "Run finished: {} URLs, {} failed, config hash {}",
        results.len(),
        stats.failed,
        config_hash.unwrap_or("(defaults)")
    );

    if !cli.quiet {
        print_statistics(&stats);
        println!(
            "\n✓ Scraped {} URLs. Results written to {}",
            results.len(),
            output_path.display()
        );
        if let Some(hash) = config_hash {
            println!("  Configuration hash: {}", hash);
        }
    }

    Ok(())
}
