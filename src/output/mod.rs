//! Output module for scrape results
//!
//! This module handles:
//! - Writing the result list as indented JSON
//! - Summarizing a finished batch for the end-of-run report

mod json;
pub mod stats;

pub use json::write_results;
pub use stats::{print_statistics, RunStatistics};
