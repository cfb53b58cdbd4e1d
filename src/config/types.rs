use serde::Deserialize;
use std::time::Duration;

/// Default number of concurrent workers
pub const DEFAULT_MAX_WORKERS: usize = 5;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after a failed attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default location of the JSON result file
pub const DEFAULT_OUTPUT_PATH: &str = "result/output.json";

/// Main configuration structure for Parasync-Scraper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scraper behavior as written in the configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// Number of concurrent fetch workers
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries after the first failed attempt
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON result file
    #[serde(default = "default_output_path")]
    pub path: String,
}

/// Runtime configuration handed to [`crate::Scraper::new`]
///
/// Immutable once the scraper is built; every worker reads the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub max_workers: usize,
    pub timeout: Duration,
    pub max_retries: u32,
    pub user_agent: String,
}

impl ScraperSettings {
    /// Converts file-level settings into the runtime scraper configuration
    pub fn to_scraper_config(&self) -> ScraperConfig {
        ScraperConfig {
            max_workers: self.max_workers,
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperSettings::default().to_scraper_config()
    }
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}
