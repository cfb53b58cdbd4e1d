//! Scraper service façade
//!
//! Owns the shared HTTP client and the validated configuration, and exposes
//! the single batch operation [`Scraper::scrape`].

use crate::config::{validate_scraper_config, ScraperConfig};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::pool::WorkerPool;
use crate::crawler::task::{scrape_one, ScrapeResult};
use crate::{ConfigError, ScrapeError};
use reqwest::Client;
use std::time::Instant;

/// Main scraping service
pub struct Scraper {
    config: ScraperConfig,
    client: Client,
}

impl Scraper {
    /// Creates a new scraper
    ///
    /// Validates the configuration and builds the HTTP client every worker
    /// will share.
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to scrape
    /// * `Err(ScrapeError)` - Invalid configuration or client build failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use parasync_scraper::{Scraper, ScraperConfig};
    ///
    /// # async fn run() -> parasync_scraper::Result<()> {
    /// let scraper = Scraper::new(ScraperConfig::default())?;
    /// let results = scraper.scrape(vec!["https://example.com/".to_string()]).await?;
    /// println!("{:?}", results[0].title);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        validate_scraper_config(&config)?;
        let client = build_http_client(&config)?;

        tracing::debug!(
            "Scraper ready: {} workers, {:?} timeout, {} retries",
            config.max_workers,
            config.timeout,
            config.max_retries
        );

        Ok(Self { config, client })
    }

    /// The configuration this scraper was built with
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Scrapes every URL and returns one result per URL, in input order
    ///
    /// Per-URL failures are recorded in each result's `error` field; this
    /// only returns `Err` if the worker pool cannot be built.
    pub async fn scrape(&self, urls: Vec<String>) -> Result<Vec<ScrapeResult>, ScrapeError> {
        let pool = WorkerPool::new(self.config.max_workers).ok_or_else(|| {
            ConfigError::Validation(format!(
                "cannot build a worker pool with {} workers",
                self.config.max_workers
            ))
        })?;

        if urls.is_empty() {
            tracing::info!("No URLs to scrape");
            return Ok(Vec::new());
        }

        let total = urls.len();
        let started = Instant::now();
        tracing::info!(
            "Scraping {} URLs with {} workers",
            total,
            pool.workers()
        );

        let client = self.client.clone();
        let max_retries = self.config.max_retries;
        let results = pool
            .run(urls, move |url: String| {
                let client = client.clone();
                async move { scrape_one(&client, &url, max_retries).await }
            })
            .await;

        let failed = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            "Scraped {} URLs in {:?} ({} succeeded, {} failed)",
            total,
            started.elapsed(),
            total - failed,
            failed
        );

        Ok(results)
    }
}
