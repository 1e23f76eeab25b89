//
//  app-directory
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `ad` binary:
//!
//! - **Table format**: app listings rendered as a table, everything else as
//!   pretty JSON
//! - **JSON format**: pretty JSON for every response, for scripting
//!
//! ## Example
//!
//! ```rust,ignore
//! use app_directory::output::OutputWriter;
//!
//! let writer = OutputWriter::json();
//! writer.write_value(&response)?;
//! writer.write_success("App approved");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde_json::Value;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables for app listings, pretty JSON otherwise.
    #[default]
    Table,
    /// Pretty JSON for everything.
    Json,
}

/// Writes command results and status messages.
///
/// Results go to stdout; errors and warnings go to stderr. Colors are
/// disabled automatically when output is piped.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Picks the format from the global `--json` flag.
    pub fn for_flag(json: bool) -> Self {
        if json {
            Self::json()
        } else {
            Self::table()
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a decoded response.
    ///
    /// In table format, a bare array of apps or an object carrying an `apps`
    /// array is printed as a table followed by the pagination line when the
    /// server reported a total. Anything else is printed as pretty JSON.
    pub fn write_value(&self, value: &Value) -> anyhow::Result<()> {
        if self.format == OutputFormat::Table {
            if let Some(apps) = app_rows(value) {
                if apps.is_empty() {
                    self.write_info("No apps found.");
                    return Ok(());
                }
                println!("{}", apps_table(apps, self.color));
                if let Some(line) = pagination_line(value) {
                    self.write_info(&line);
                }
                return Ok(());
            }
        }
        write_json(value)
    }

    /// Writes a text document (llms.txt, SKILL.md) verbatim.
    pub fn write_text(&self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Returns the app objects of a listing response, if it is one.
///
/// Bare arrays only count when every element carries a `slug`, so key and
/// webhook lists stay JSON.
fn app_rows(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Object(map) => {
            let rows = map.get("apps")?.as_array()?;
            rows.iter().all(Value::is_object).then_some(rows.as_slice())
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(|app| app.get("slug").is_some()) => {
            Some(items.as_slice())
        }
        _ => None,
    }
}

fn pagination_line(value: &Value) -> Option<String> {
    let total = value.get("total")?.as_u64()?;
    match (
        value.get("page").and_then(Value::as_u64),
        value.get("total_pages").and_then(Value::as_u64),
    ) {
        (Some(page), Some(pages)) => Some(format!("Page {page} of {pages} ({total} total)")),
        _ => Some(format!("{total} total")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_app_rows_detects_listings() {
        let listing = json!({"apps": [{"name": "a"}], "total": 1});
        assert_eq!(app_rows(&listing).map(<[Value]>::len), Some(1));

        let bare = json!([{"name": "a", "slug": "a"}, {"name": "b", "slug": "b"}]);
        assert_eq!(app_rows(&bare).map(<[Value]>::len), Some(2));

        assert!(app_rows(&json!([{"id": "k1", "name": "ci"}])).is_none());
        assert!(app_rows(&json!([])).is_none());

        assert!(app_rows(&json!({"status": "ok"})).is_none());
        assert!(app_rows(&json!(["rest", "grpc"])).is_none());
    }

    #[test]
    fn test_pagination_line() {
        let value = json!({"apps": [], "total": 42, "page": 2, "total_pages": 3});
        assert_eq!(pagination_line(&value).as_deref(), Some("Page 2 of 3 (42 total)"));
        assert_eq!(pagination_line(&json!({"total": 5})).as_deref(), Some("5 total"));
        assert!(pagination_line(&json!({})).is_none());
    }

    #[test]
    fn test_for_flag() {
        assert_eq!(OutputWriter::for_flag(true).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::for_flag(false).format(), OutputFormat::Table);
    }
}
