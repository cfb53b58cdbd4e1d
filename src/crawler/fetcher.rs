//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the shared HTTP client with the configured timeout
//! - One GET request per call, with no retry of its own
//! - Status validation (only 200 is accepted)
//! - Parsing the response body into a navigable document
//! - Error classification

use crate::config::ScraperConfig;
use reqwest::{Client, StatusCode};
use scraper::Html;
use thiserror::Error;
use url::Url;

/// Connection establishment is capped separately from the overall deadline
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Broad category of a failed result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    HttpStatus,
    Parse,
    /// The task panicked or its worker went away
    Aborted,
}

/// Ways a single fetch attempt can fail
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed, so no request was sent
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// The request could not be completed (DNS, refused connection, timeout)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(u16),

    /// The response body could not be turned into a document
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

impl FetchError {
    /// Whether another attempt could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::InvalidUrl { .. })
    }

    /// Category recorded on the failed result
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::InvalidUrl { .. } => FailureKind::InvalidUrl,
            FetchError::Network(_) => FailureKind::Network,
            FetchError::HttpStatus(_) => FailureKind::HttpStatus,
            FetchError::Parse(_) => FailureKind::Parse,
        }
    }
}

/// Builds the HTTP client shared by every worker
///
/// # Arguments
///
/// * `config` - The scraper configuration (timeout and user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use parasync_scraper::config::ScraperConfig;
/// use parasync_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    let connect_timeout = config
        .timeout
        .min(std::time::Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS));

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .connect_timeout(connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the body into an HTML document
///
/// Performs exactly one GET request. The client's own timeout is the only
/// deadline; redirects follow the client defaults.
///
/// | Condition | Error |
/// |-----------|-------|
/// | URL does not parse | `InvalidUrl` |
/// | DNS, refused connection, timeout | `Network` |
/// | Status other than 200 | `HttpStatus` |
/// | Body stalls or breaks off mid-read | `Network` |
/// | Body cannot be decoded | `Parse` |
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(FetchError::Network)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Network(e)
        }
    })?;

    Ok(parse_document(&body))
}

/// Parses an HTML string into a document
///
/// html5ever recovers from any malformed input, so this never fails.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
