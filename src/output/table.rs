//
//  app-directory
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders app listings as terminal tables using `comfy_table`.
//!
//! ```rust,ignore
//! use app_directory::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Name", "Status"])
//!     .row(["Weather API", "approved"])
//!     .build();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for a table with an optional colored header row.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors an app status by its moderation meaning.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "approved" | "healthy" => style(status).green().to_string(),
        "rejected" | "unhealthy" | "unreachable" => style(status).red().to_string(),
        "pending" | "degraded" => style(status).yellow().to_string(),
        "deprecated" => style(status).dim().to_string(),
        _ => status.to_string(),
    }
}

/// Truncates on a character boundary, appending `...` when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

fn text(app: &Value, field: &str) -> String {
    match app.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Builds the table for a list of app objects.
///
/// Missing fields render as empty cells.
pub fn apps_table(apps: &[Value], color: bool) -> Table {
    let mut builder = TableBuilder::new()
        .color(color)
        .headers(["Name", "Slug", "Protocol", "Category", "Status", "Rating", "Summary"]);

    for app in apps {
        let rating = match app.get("avg_rating").and_then(Value::as_f64) {
            Some(r) => format!("{r:.1}"),
            None => String::new(),
        };
        builder = builder.row([
            text(app, "name"),
            text(app, "slug"),
            text(app, "protocol"),
            text(app, "category"),
            format_status(&text(app, "status"), color),
            rating,
            truncate(&text(app, "short_description"), 48),
        ]);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("approved", false), "approved");
    }

    #[test]
    fn test_apps_table_renders_rows() {
        let apps = vec![
            json!({"name": "Weather API", "slug": "weather-api", "status": "approved", "avg_rating": 4.25}),
            json!({"name": "Bare"}),
        ];
        let rendered = apps_table(&apps, false).to_string();
        assert!(rendered.contains("Weather API"));
        assert!(rendered.contains("weather-api"));
        assert!(rendered.contains("4.2") || rendered.contains("4.3"));
        assert!(rendered.contains("Bare"));
    }
}
