use std::path::Path;
use tracing::trace;

use super::matcher::LineMatcher;
use crate::errors::{ScanError, ScanResult};
use crate::results::FileResult;

/// Reads files and runs the line matcher over their contents
#[derive(Debug)]
pub struct FileScanner {
    matcher: LineMatcher,
}

impl FileScanner {
    /// Creates a new FileScanner with the given line matcher
    pub fn new(matcher: LineMatcher) -> Self {
        Self { matcher }
    }

    /// Scans a single file and returns its matches, which may be empty.
    ///
    /// Read and decode failures are fatal to the caller; there is no
    /// skip-and-continue path.
    pub fn scan_file(&self, path: &Path) -> ScanResult<FileResult> {
        trace!("Scanning file: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
            _ => ScanError::IoError(e),
        })?;

        let contents =
            String::from_utf8(bytes).map_err(|e| ScanError::encoding_error(path, e))?;

        Ok(FileResult {
            file: path.to_path_buf(),
            matches: self.matcher.match_lines(&contents),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn scanner(pattern: &str) -> FileScanner {
        FileScanner::new(LineMatcher::new(pattern).unwrap())
    }

    #[test]
    fn test_scan_file_collects_matches_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.php");
        fs::write(&path, "<?php\n// @return int|string|null\n").unwrap();

        let result = scanner("@return").scan_file(&path).unwrap();

        assert_eq!(result.file, path);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].line_number, 2);
    }

    #[test]
    fn test_scan_file_with_no_matches_returns_empty_result() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.php");
        fs::write(&path, "<?php\necho 'hello';\n").unwrap();

        let result = scanner("@return").scan_file(&path).unwrap();
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_scan_file_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = scanner("@return")
            .scan_file(&dir.path().join("gone.php"))
            .unwrap_err();

        assert!(matches!(err, ScanError::FileNotFound(_)));
    }

    #[test]
    fn test_scan_file_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.php");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let err = scanner("@return").scan_file(&path).unwrap_err();
        assert!(matches!(err, ScanError::EncodingError { .. }));
    }
}
