//! Parasync-Scraper: a concurrent page summary scraper
//!
//! This crate fetches a batch of web pages through a bounded worker pool and
//! extracts the title, meta description and top-level headings of each page.
//! Every URL yields exactly one result; failures are recorded per URL and
//! never abort the batch.

pub mod config;
pub mod crawler;
pub mod input;
pub mod output;

use thiserror::Error;

/// Main error type for Parasync-Scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error for {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Parasync-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::{Config, ScraperConfig};
pub use crawler::{ScrapeResult, Scraper};
