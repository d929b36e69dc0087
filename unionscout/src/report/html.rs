use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::ScanResult;
use crate::results::ResultSet;

const HEADER: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Union Types Report</title>
  <style>
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid black; padding: 8px; text-align: left; }
    th { background-color: #f2f2f2; }
  </style>
</head>
<body>
  <h1>Union Types Report</h1>
  <table>
    <thead>
      <tr>
        <th>File</th>
        <th>Line Number</th>
        <th>Code</th>
      </tr>
    </thead>
    <tbody>
"#;

const FOOTER: &str = r#"
    </tbody>
  </table>
</body>
</html>
"#;

/// Renders the results as one static HTML document with one table row per
/// matched line.
///
/// Cell text is embedded verbatim: markup characters in file paths or line
/// text are not escaped, so the report reproduces file contents byte for
/// byte inside the cells.
pub fn render(results: &ResultSet) -> String {
    let mut html = String::from(HEADER);

    for file_result in &results.file_results {
        for file_match in &file_result.matches {
            html.push_str(&format!(
                "\n      <tr>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n      </tr>\n",
                file_result.file.display(),
                file_match.line_number,
                file_match.line
            ));
        }
    }

    html.push_str(FOOTER);
    html
}

/// Writes the HTML report to `path`, overwriting any existing file there.
pub fn write(results: &ResultSet, path: &Path) -> ScanResult<()> {
    fs::write(path, render(results))?;
    debug!("Wrote HTML report to {}", path.display());
    Ok(())
}
