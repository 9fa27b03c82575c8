//! CSV serialisation and download filenames for chart exports.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use protocol::Record;
use serde_json::Value;

use crate::table::cell_text;

pub const DEFAULT_CSV_FILENAME: &str = "chart-data";
pub const DEFAULT_IMAGE_FILENAME: &str = "chart";
/// Name used by the "Save PNG" button next to a rendered chart.
pub const EXPORT_IMAGE_FILENAME: &str = "chart-export";
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Serialise records as CSV, one `\n`-terminated line per row.
///
/// The header row is the first record's keys in order. A value containing a
/// comma is wrapped in double quotes; no other escaping is applied. Returns
/// `None` for an empty record set.
#[must_use]
pub fn records_to_csv(records: &[Record]) -> Option<String> {
    let headers: Vec<&String> = records.first()?.keys().collect();

    let mut csv = headers.iter().map(|h| h.as_str()).collect::<Vec<_>>().join(",");
    csv.push('\n');
    for record in records {
        let line = headers
            .iter()
            .map(|header| csv_field(record.get(header.as_str()).unwrap_or(&Value::Null)))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    Some(csv)
}

#[must_use]
pub fn csv_filename(name: &str) -> String {
    format!("{name}.csv")
}

#[must_use]
pub fn image_filename(name: &str) -> String {
    format!("{name}.png")
}

fn csv_field(value: &Value) -> String {
    let text = cell_text(value);
    if text.contains(',') { format!("\"{text}\"") } else { text }
}
