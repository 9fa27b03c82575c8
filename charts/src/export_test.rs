use super::*;
use serde_json::json;

fn records(value: Value) -> Vec<Record> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|row| row.as_object().expect("object").clone())
        .collect()
}

#[test]
fn quotes_values_containing_commas() {
    let csv = records_to_csv(&records(json!([{ "a": 1, "b": "x,y" }]))).expect("csv");
    assert_eq!(csv, "a,b\n1,\"x,y\"\n");
}

#[test]
fn header_follows_first_record_key_order() {
    let csv = records_to_csv(&records(json!([
        { "day": "Mon", "revenue": 120.5 },
        { "revenue": 99, "day": "Tue" }
    ])))
    .expect("csv");
    assert_eq!(csv, "day,revenue\nMon,120.5\nTue,99\n");
}

#[test]
fn missing_and_null_values_are_empty() {
    let csv = records_to_csv(&records(json!([{ "a": 1, "b": null }, { "a": 2 }]))).expect("csv");
    assert_eq!(csv, "a,b\n1,\n2,\n");
}

#[test]
fn embedded_quotes_are_left_alone() {
    let csv = records_to_csv(&records(json!([{ "name": "the \"best\" tea" }]))).expect("csv");
    assert_eq!(csv, "name\nthe \"best\" tea\n");
}

#[test]
fn empty_records_produce_nothing() {
    assert_eq!(records_to_csv(&[]), None);
}

#[test]
fn filenames_get_extensions() {
    assert_eq!(csv_filename(DEFAULT_CSV_FILENAME), "chart-data.csv");
    assert_eq!(image_filename(DEFAULT_IMAGE_FILENAME), "chart.png");
    assert_eq!(image_filename(EXPORT_IMAGE_FILENAME), "chart-export.png");
}
