//! Crawler module for concurrent page scraping
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching and status validation
//! - Title, description and heading extraction
//! - The per-URL task runner with bounded retries
//! - The bounded worker pool and the scraper façade

mod extractor;
mod fetcher;
mod pool;
mod service;
mod task;

pub use extractor::{extract, PageSummary};
pub use fetcher::{
    build_http_client, fetch_document, parse_document, FailureKind, FetchError,
};
pub use pool::WorkerPool;
pub use service::Scraper;
pub use task::{scrape_one, ScrapeResult};

use crate::config::ScraperConfig;
use crate::ScrapeError;

/// Runs a complete scrape of `urls`
///
/// Convenience entry point that builds a [`Scraper`] and runs one batch.
///
/// # Returns
///
/// * `Ok(Vec<ScrapeResult>)` - One result per URL, in input order
/// * `Err(ScrapeError)` - The configuration was invalid
pub async fn scrape(
    config: ScraperConfig,
    urls: Vec<String>,
) -> Result<Vec<ScrapeResult>, ScrapeError> {
    Scraper::new(config)?.scrape(urls).await
}
