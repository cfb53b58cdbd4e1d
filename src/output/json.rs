//! JSON result writer

use crate::crawler::ScrapeResult;
use crate::ScrapeError;
use std::path::Path;

/// Writes results to `path` as an indented JSON array
///
/// Missing parent directories are created. The `error` key is only present
/// on failed entries.
pub fn write_results(results: &[ScrapeResult], path: &Path) -> Result<(), ScrapeError> {
    let io_error = |source| ScrapeError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).map_err(io_error)?;

    tracing::info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}
