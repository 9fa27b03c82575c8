//! Formatting and export helpers for chart and tabular data.
//!
//! This crate is UI-framework agnostic: every function here is pure and
//! total over its inputs, so the browser client can call it from render
//! paths and tests can exercise it without a DOM. Triggering the actual
//! browser download is left to the caller.

pub mod export;
pub mod format;
pub mod table;

pub use export::{csv_filename, image_filename, records_to_csv};
pub use format::{DateStyle, format_currency, format_date, format_number, numeric_value, parse_date};
pub use table::{DataTable, generate_data_table};
