use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a single matched line in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMatch {
    /// The 1-based line number where the pattern matched
    #[serde(rename = "lineNumber")]
    pub line_number: usize,
    /// The content of the matching line, verbatim
    pub line: String,
}

/// Represents all matches found in a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// The path to the file
    pub file: PathBuf,
    /// All matches found in the file, in ascending line order
    pub matches: Vec<FileMatch>,
}

/// The complete results of one scan run, in discovery order.
///
/// Serializes transparently as a JSON array of per-file records, which is
/// the shape downstream tooling consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    /// Results per file; only files with at least one match appear
    pub file_results: Vec<FileResult>,
}

impl ResultSet {
    /// Creates a new empty result set
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a file result to the set. Files with no matches are dropped
    /// entirely rather than recorded as empty entries.
    pub fn add_file_result(&mut self, file_result: FileResult) {
        if !file_result.matches.is_empty() {
            self.file_results.push(file_result);
        }
    }

    /// Total number of matched lines across all files
    pub fn total_matches(&self) -> usize {
        self.file_results.iter().map(|fr| fr.matches.len()).sum()
    }

    /// Number of files that had at least one match
    pub fn files_with_matches(&self) -> usize {
        self.file_results.len()
    }

    pub fn len(&self) -> usize {
        self.file_results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_results.is_empty()
    }
}
