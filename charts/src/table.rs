//! Data-table model and markup for chart records.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use protocol::Record;
use serde_json::Value;

use crate::format::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMALS, DateStyle, format_currency, format_date, format_number, parse_date};

/// Markup returned for an empty record set.
pub const NO_DATA_HTML: &str = "<p>No data available</p>";
pub const SHOW_TABLE_LABEL: &str = "Show Data Table";
pub const HIDE_TABLE_LABEL: &str = "Hide Data Table";

const MONEY_HINTS: [&str; 4] = ["price", "cost", "amount", "total"];
const DATE_HINTS: [&str; 2] = ["date", "time"];

/// Formatted table: column names from the first record, one row of display
/// strings per record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Build the table, or `None` when there are no records.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let headers: Vec<String> = records.first()?.keys().cloned().collect();
        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|column| format_cell(column, record.get(column).unwrap_or(&Value::Null)))
                    .collect()
            })
            .collect();
        Some(Self { headers, rows })
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="data-table-container"><table class="data-table">"#);
        html.push_str("<thead><tr>");
        for header in &self.headers {
            html.push_str("<th>");
            html.push_str(&escape_html(header));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&escape_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></div>");
        html
    }
}

/// Render records as an HTML table, or [`NO_DATA_HTML`] when empty.
#[must_use]
pub fn generate_data_table(records: &[Record]) -> String {
    DataTable::from_records(records).map_or_else(|| NO_DATA_HTML.to_owned(), |table| table.to_html())
}

/// Display string for one cell.
///
/// Money columns format numbers as currency, date columns format parseable
/// dates, other numbers get grouping, and anything else is shown as text.
#[must_use]
pub fn format_cell(column: &str, value: &Value) -> String {
    let column = column.to_lowercase();
    if let Some(number) = value.as_f64() {
        if MONEY_HINTS.iter().any(|hint| column.contains(hint)) {
            return format_currency(Some(number), DEFAULT_CURRENCY_SYMBOL);
        }
    }
    let text = cell_text(value);
    if DATE_HINTS.iter().any(|hint| column.contains(hint)) && parse_date(&text).is_some() {
        return format_date(&text, DateStyle::Medium);
    }
    if let Some(number) = value.as_f64() {
        return format_number(Some(number), DEFAULT_DECIMALS);
    }
    text
}

/// Button label for a table that is currently `visible`.
#[must_use]
pub fn toggle_label(visible: bool) -> &'static str {
    if visible { HIDE_TABLE_LABEL } else { SHOW_TABLE_LABEL }
}

/// Plain text of a JSON value; `null` renders empty.
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
