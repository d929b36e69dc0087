use regex::Regex;

use crate::errors::{ScanError, ScanResult};
use crate::results::FileMatch;

/// Tests file contents line by line against a single compiled pattern
#[derive(Debug, Clone)]
pub struct LineMatcher {
    regex: Regex,
}

impl LineMatcher {
    /// Compiles `pattern` once; the same regex is reused for every file in
    /// a run. A pattern that fails to compile is fatal.
    pub fn new(pattern: &str) -> ScanResult<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| ScanError::invalid_pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Returns one `FileMatch` per line of `contents` where the pattern
    /// matches as a substring, with 1-based line numbers.
    ///
    /// Lines are separated on `'\n'` alone, so a file with CRLF endings
    /// keeps the trailing `'\r'` in each reported line.
    pub fn match_lines(&self, contents: &str) -> Vec<FileMatch> {
        contents
            .split('\n')
            .enumerate()
            .filter(|(_, line)| self.regex.is_match(line))
            .map(|(index, line)| FileMatch {
                line_number: index + 1,
                line: line.to_string(),
            })
            .collect()
    }
}
