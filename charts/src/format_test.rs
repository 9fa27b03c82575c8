use super::*;
use serde_json::json;

// =============================================================
// Numbers
// =============================================================

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(Some(1234.5), 1), "1,234.5");
    assert_eq!(format_number(Some(1_234_567.0), DEFAULT_DECIMALS), "1,234,567");
    assert_eq!(format_number(Some(999.0), 0), "999");
    assert_eq!(format_number(Some(0.0), 2), "0.00");
}

#[test]
fn format_number_rounds_half_away_from_zero() {
    assert_eq!(format_number(Some(2.5), 0), "3");
    assert_eq!(format_number(Some(1234.5), 0), "1,235");
    assert_eq!(format_number(Some(-2.5), 0), "-3");
}

#[test]
fn format_number_rounds_on_decimal_representation() {
    assert_eq!(format_number(Some(1.005), 2), "1.01");
    assert_eq!(format_number(Some(-1.005), 2), "-1.01");
    assert_eq!(format_number(Some(999.995), 2), "1,000.00");
    assert_eq!(format_number(Some(9.5), 0), "10");
    assert_eq!(format_number(Some(0.125), 5), "0.12500");
    assert_eq!(format_currency(Some(2.675), "$"), "$2.68");
}

#[test]
fn format_number_keeps_sign_for_negative_values() {
    assert_eq!(format_number(Some(-1234.25), 2), "-1,234.25");
    assert_eq!(format_number(Some(-0.001), 0), "0");
}

#[test]
fn format_number_uses_placeholder_for_missing_or_non_finite() {
    assert_eq!(format_number(None, 0), PLACEHOLDER);
    assert_eq!(format_number(Some(f64::NAN), 2), "-");
    assert_eq!(format_number(Some(f64::INFINITY), 0), "-");
}

#[test]
fn numeric_value_accepts_numbers_and_numeric_strings() {
    assert_eq!(numeric_value(&json!(12)), Some(12.0));
    assert_eq!(numeric_value(&json!(" 7.5 ")), Some(7.5));
    assert_eq!(numeric_value(&json!("abc")), None);
    assert_eq!(numeric_value(&json!("")), None);
    assert_eq!(numeric_value(&json!(null)), None);
    assert_eq!(numeric_value(&json!(true)), None);
}

// =============================================================
// Currency
// =============================================================

#[test]
fn format_currency_fixes_two_decimals_with_symbol() {
    assert_eq!(format_currency(Some(1234.5), DEFAULT_CURRENCY_SYMBOL), "$1,234.50");
    assert_eq!(format_currency(Some(12.0), "€"), "€12.00");
    assert_eq!(format_currency(Some(0.125), "$"), "$0.13");
}

#[test]
fn format_currency_uses_placeholder_without_symbol() {
    assert_eq!(format_currency(None, "$"), "-");
    assert_eq!(format_currency(Some(f64::NAN), "€"), "-");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_styles() {
    assert_eq!(format_date("2024-01-15", DateStyle::Short), "1/15/2024");
    assert_eq!(format_date("2024-01-15", DateStyle::Medium), "Jan 15, 2024");
    assert_eq!(format_date("2024-01-15", DateStyle::Long), "Monday, January 15, 2024");
}

#[test]
fn format_date_accepts_timestamps() {
    assert_eq!(format_date("2024-03-09T18:45:00Z", DateStyle::Medium), "Mar 9, 2024");
    assert_eq!(format_date("2024-03-09T18:45:00+02:00", DateStyle::Short), "3/9/2024");
    assert_eq!(format_date("2024-03-09 18:45:00", DateStyle::Medium), "Mar 9, 2024");
    assert_eq!(format_date("2024-03-09T18:45", DateStyle::Medium), "Mar 9, 2024");
}

#[test]
fn format_date_returns_unparseable_input_unchanged() {
    assert_eq!(format_date("last tuesday", DateStyle::Medium), "last tuesday");
    assert_eq!(format_date("2024-13-40", DateStyle::Long), "2024-13-40");
}

#[test]
fn format_date_uses_placeholder_for_empty_input() {
    assert_eq!(format_date("", DateStyle::Medium), PLACEHOLDER);
}

#[test]
fn date_style_from_name_defaults_to_medium() {
    assert_eq!(DateStyle::from_name("short"), DateStyle::Short);
    assert_eq!(DateStyle::from_name("long"), DateStyle::Long);
    assert_eq!(DateStyle::from_name("medium"), DateStyle::Medium);
    assert_eq!(DateStyle::from_name("fancy"), DateStyle::Medium);
    assert_eq!(DateStyle::default(), DateStyle::Medium);
}
