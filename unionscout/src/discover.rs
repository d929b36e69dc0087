use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::ScanResult;

/// File-name suffix of the source files the scanner reports on
pub const PHP_EXTENSION: &str = ".php";

/// Recursively lists the files under `root` whose name ends with `extension`.
///
/// Every entry reported as a directory is descended into and every entry
/// reported as a plain file with the matching suffix is returned; hidden
/// files, ignore files, and symlinks get no special treatment. Sibling order
/// is whatever the underlying directory listing yields. Any traversal error
/// aborts the whole discovery.
pub fn discover_files(root: &Path, extension: &str) -> ScanResult<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            files.push(entry.into_path());
        }
    }

    debug!(
        "Discovered {} candidate files under {}",
        files.len(),
        root.display()
    );

    Ok(files)
}
