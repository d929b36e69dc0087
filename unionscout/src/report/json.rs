use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::ScanResult;
use crate::results::ResultSet;

/// Serializes `results` as a pretty-printed JSON array with 2-space
/// indentation. Deserializing the output reproduces an equivalent set.
pub fn render(results: &ResultSet) -> ScanResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes the JSON report to `path`, overwriting any existing file there.
pub fn write(results: &ResultSet, path: &Path) -> ScanResult<()> {
    fs::write(path, render(results)?)?;
    debug!("Wrote JSON report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{FileMatch, FileResult};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample() -> ResultSet {
        let mut results = ResultSet::new();
        results.add_file_result(FileResult {
            file: PathBuf::from("src/Model.php"),
            matches: vec![FileMatch {
                line_number: 2,
                line: "@return string|int|bool".to_string(),
            }],
        });
        results
    }

    #[test]
    fn test_render_pretty_prints_with_two_space_indent() {
        let expected = r#"[
  {
    "file": "src/Model.php",
    "matches": [
      {
        "lineNumber": 2,
        "line": "@return string|int|bool"
      }
    ]
  }
]"#;
        assert_eq!(render(&sample()).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_set_is_an_empty_array() {
        assert_eq!(render(&ResultSet::new()).unwrap(), "[]");
    }

    #[test]
    fn test_render_round_trips() {
        let results = sample();
        let parsed: ResultSet = serde_json::from_str(&render(&results).unwrap()).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_rendering_twice_is_byte_identical() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        let results = sample();

        write(&results, &first).unwrap();
        write(&results, &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_write_overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "stale").unwrap();

        write(&ResultSet::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
