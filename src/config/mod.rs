//! Configuration module for Parasync-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; command-line flags override whatever the file sets.
//!
//! # Example
//!
//! ```no_run
//! use parasync_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Scraper will use {} workers", config.scraper.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, ScraperConfig, ScraperSettings, DEFAULT_MAX_RETRIES,
    DEFAULT_MAX_WORKERS, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

// Re-export validation entry points
pub use validation::{validate, validate_scraper_config, MAX_WORKERS_LIMIT, MIN_TIMEOUT};
