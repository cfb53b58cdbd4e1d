use crate::config::types::{Config, OutputConfig, ScraperConfig};
use crate::ConfigError;
use std::time::Duration;

/// Upper bound on the worker count
pub const MAX_WORKERS_LIMIT: usize = 256;

/// Shortest per-request timeout accepted
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper.to_scraper_config())?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the runtime scraper configuration
///
/// Called by [`crate::Scraper::new`] as well, so a configuration built in code
/// gets the same checks as one loaded from a file.
pub fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > MAX_WORKERS_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_workers must be between 1 and {}, got {}",
            MAX_WORKERS_LIMIT, config.max_workers
        )));
    }

    if config.timeout < MIN_TIMEOUT {
        return Err(ConfigError::Validation(format!(
            "timeout must be at least {}s, got {:?}",
            MIN_TIMEOUT.as_secs(),
            config.timeout
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
