//! Run statistics
//!
//! This module summarizes a finished batch for the end-of-run report.

use crate::crawler::{FailureKind, ScrapeResult};
use std::collections::HashMap;

/// Batch statistics summary
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    /// Number of URLs in the batch
    pub total: usize,

    /// Results without an error
    pub succeeded: usize,

    /// Results with an error
    pub failed: usize,

    /// Failed results grouped by category
    pub failures_by_kind: HashMap<FailureKind, usize>,

    /// Successful pages that had no title
    pub missing_titles: usize,

    /// Total h1 headings collected
    pub total_headings: usize,
}

impl RunStatistics {
    /// Computes statistics over a result set
    pub fn from_results(results: &[ScrapeResult]) -> Self {
        let mut stats = RunStatistics {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            match &result.error {
                Some(_) => {
                    stats.failed += 1;
                    let kind = result.kind.unwrap_or(FailureKind::Aborted);
                    *stats.failures_by_kind.entry(kind).or_insert(0) += 1;
                }
                None => {
                    stats.succeeded += 1;
                    stats.total_headings += result.headings.len();
                    if result.title.is_empty() {
                        stats.missing_titles += 1;
                    }
                }
            }
        }

        stats
    }

    /// Share of URLs that succeeded, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total > 0 {
            (self.succeeded as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  URLs requested: {}", stats.total);
    println!("  Succeeded: {}", stats.succeeded);
    println!("  Failed: {}", stats.failed);
    println!("  Headings collected: {}", stats.total_headings);
    if stats.missing_titles > 0 {
        println!("  Pages without a title: {}", stats.missing_titles);
    }
    println!();

    if !stats.failures_by_kind.is_empty() {
        println!("Failures by Kind:");
        let mut kinds: Vec<_> = stats.failures_by_kind.iter().collect();
        kinds.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        for (kind, count) in kinds {
            println!("  {:?}: {}", kind, count);
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} URLs scraped)",
        stats.success_rate(),
        stats.succeeded,
        stats.total
    );
}
