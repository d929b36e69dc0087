use std::path::PathBuf;

/// Default search pattern: a `@return` doc-tag followed by a `|`-separated
/// union of non-whitespace type tokens.
pub const DEFAULT_PATTERN: &str = r"@return.*\S+\|\S+\|\S+";

/// Output format for the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
}

impl OutputFormat {
    /// File extension used for reports written in this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

/// Configuration for one scan run.
///
/// Built once from command-line arguments and passed by reference to every
/// downstream call; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Format of the report file to write
    pub format: OutputFormat,
    /// Root directory to scan
    pub root_path: PathBuf,
    /// Regular expression source tested against every line
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Html.extension(), "html");
    }

    #[test]
    fn test_default_pattern_matches_union_return_tags() {
        let regex = Regex::new(DEFAULT_PATTERN).unwrap();

        assert!(regex.is_match("@return string|int|bool"));
        assert!(regex.is_match(" * @return array|false|null on failure"));

        assert!(!regex.is_match("@return string"));
        assert!(!regex.is_match("function foo(): string|int|bool"));
    }
}
