//! URL list input
//!
//! Reads the line-delimited URL file handed to the scraper.

use crate::ScrapeError;
use std::path::Path;

/// Reads URLs from a file, one per line
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// No URL validation happens here: a malformed entry still produces its own
/// failed result later, so the output lists everything the user asked for.
pub fn read_urls(path: &Path) -> Result<Vec<String>, ScrapeError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScrapeError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let urls = parse_urls(&content);
    tracing::debug!("Read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Splits file content into URL entries
pub fn parse_urls(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
