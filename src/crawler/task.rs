//! Per-URL task runner
//!
//! Combines the fetcher and the extractor for one URL and turns every failure
//! into a [`ScrapeResult`] with its `error` field set. Nothing here returns an
//! `Err` or panics on bad input, so a worker can always hand a result back to
//! the collector.

use crate::crawler::extractor::{extract, PageSummary};
use crate::crawler::fetcher::{fetch_document, FailureKind, FetchError};
use reqwest::Client;
use serde::Serialize;

/// The record produced for each input URL
///
/// Either the content fields are populated or `error` is set, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    /// The URL that was scraped
    pub url: String,

    /// Page title
    pub title: String,

    /// Meta description content
    pub description: String,

    /// Every h1 heading, in document order
    pub headings: Vec<String>,

    /// Error message if scraping failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Category of the failure, set together with `error`
    #[serde(skip)]
    pub kind: Option<FailureKind>,
}

impl ScrapeResult {
    /// Builds a successful result from an extracted summary
    pub fn success(url: impl Into<String>, summary: PageSummary) -> Self {
        Self {
            url: url.into(),
            title: summary.title,
            description: summary.description,
            headings: summary.headings,
            error: None,
            kind: None,
        }
    }

    /// Builds a failed result with empty content
    pub fn failure(url: impl Into<String>, kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Builds a failed result from the last fetch error
    pub fn from_fetch_error(url: impl Into<String>, error: &FetchError) -> Self {
        Self::failure(url, error.kind(), error.to_string())
    }

    /// Whether this result carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Scrapes one URL, retrying failed attempts up to `max_retries` times
///
/// Makes at most `max_retries + 1` attempts with no delay between them.
/// Invalid URLs are reported on the first attempt.
pub async fn scrape_one(client: &Client, url: &str, max_retries: u32) -> ScrapeResult {
    let attempts = max_retries.saturating_add(1);
    let mut attempt = 1;

    loop {
        match fetch_summary(client, url).await {
            Ok(summary) => {
                tracing::debug!("Scraped {} (attempt {}/{})", url, attempt, attempts);
                return ScrapeResult::success(url, summary);
            }
            Err(e) if e.is_retryable() && attempt < attempts => {
                tracing::debug!(
                    "Attempt {}/{} for {} failed: {}",
                    attempt,
                    attempts,
                    url,
                    e
                );
                attempt += 1;
            }
            Err(e) => {
                tracing::debug!("Giving up on {} after {} attempt(s): {}", url, attempt, e);
                return ScrapeResult::from_fetch_error(url, &e);
            }
        }
    }
}

/// One fetch-then-extract attempt
///
/// The document is dropped before this returns so the caller's future only
/// ever holds the `Send` summary.
async fn fetch_summary(client: &Client, url: &str) -> Result<PageSummary, FetchError> {
    let document = fetch_document(client, url).await?;
    Ok(extract(&document))
}
