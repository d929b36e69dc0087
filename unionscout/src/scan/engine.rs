use tracing::{debug, info};

use super::matcher::LineMatcher;
use super::processor::FileScanner;
use crate::config::ScanConfig;
use crate::discover::{discover_files, PHP_EXTENSION};
use crate::errors::ScanResult;
use crate::results::ResultSet;

/// Runs a full scan: discovers files under the configured root, tests every
/// line of each against the configured pattern, and collects the files that
/// matched, in discovery order.
///
/// Files are scanned one at a time; the first error of any kind aborts the
/// run with nothing written.
pub fn scan(config: &ScanConfig) -> ScanResult<ResultSet> {
    info!(
        "Starting scan of {} with pattern: {}",
        config.root_path.display(),
        config.pattern
    );

    let matcher = LineMatcher::new(&config.pattern)?;
    let scanner = FileScanner::new(matcher);

    let files = discover_files(&config.root_path, PHP_EXTENSION)?;
    debug!("Found {} files to scan", files.len());

    let mut results = ResultSet::new();
    for path in files {
        let file_result = scanner.scan_file(&path)?;
        results.add_file_result(file_result);
    }

    info!(
        "Scan complete. Found {} matches in {} files",
        results.total_matches(),
        results.files_with_matches()
    );

    Ok(results)
}
