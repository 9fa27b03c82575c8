//! Number, currency and date formatting with en-US conventions.
//!
//! All functions are total: missing or non-numeric input yields
//! [`PLACEHOLDER`], and unparseable dates come back unchanged.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

/// Shown in place of a missing or non-numeric value.
pub const PLACEHOLDER: &str = "-";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_DECIMALS: usize = 0;

const MAX_FRACTION_DIGITS: usize = 20;
const CURRENCY_DECIMALS: usize = 2;

/// Output style for [`format_date`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `1/15/2024`
    Short,
    /// `Jan 15, 2024`
    #[default]
    Medium,
    /// `Monday, January 15, 2024`
    Long,
}

impl DateStyle {
    /// Resolve a style by name; unknown names fall back to [`DateStyle::Medium`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }
}

/// Coerce a JSON value to a number: JSON numbers as-is, strings when they
/// hold a finite number after trimming. Everything else is non-numeric.
#[must_use]
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Format with thousands grouping and exactly `decimals` fraction digits,
/// rounding half away from zero.
#[must_use]
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_owned();
    };
    let decimals = decimals.min(MAX_FRACTION_DIGITS);
    let fixed = round_half_away(value.abs(), decimals);
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format as a two-decimal amount prefixed with `symbol`.
#[must_use]
pub fn format_currency(value: Option<f64>, symbol: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(amount) => format!("{symbol}{}", format_number(Some(amount), CURRENCY_DECIMALS)),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Format a date string in the given style.
///
/// Empty input yields [`PLACEHOLDER`]; input [`parse_date`] cannot read is
/// returned unchanged.
#[must_use]
pub fn format_date(raw: &str, style: DateStyle) -> String {
    if raw.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    match parse_date(raw) {
        Some(date) => format_calendar_date(date, style),
        None => raw.to_owned(),
    }
}

/// Read the calendar date out of an RFC 3339 timestamp, a bare
/// `YYYY-MM-DD`, or a local `YYYY-MM-DD[T ]HH:MM[:SS]` timestamp.
///
/// Timestamps keep the date as written; no timezone conversion happens.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(stamp.date());
    }
    PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]")))
        .map(PrimitiveDateTime::date)
        .or_else(|_| Date::parse(raw, format_description!("[year]-[month]-[day]")))
        .ok()
}

#[must_use]
pub fn format_calendar_date(date: Date, style: DateStyle) -> String {
    match style {
        DateStyle::Short => format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()),
        DateStyle::Medium => format!("{} {}, {}", short_month(date.month()), date.day(), date.year()),
        DateStyle::Long => format!("{}, {} {}, {}", date.weekday(), date.month(), date.day(), date.year()),
    }
}

fn short_month(month: Month) -> String {
    month.to_string().chars().take(3).collect()
}

/// Fixed-point text of a non-negative `value` with exactly `decimals`
/// fraction digits.
///
/// Rounds on the shortest decimal representation of `value`, so `1.005`
/// rounds to `1.01` even though its binary value sits just below.
fn round_half_away(value: f64, decimals: usize) -> String {
    let repr = value.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();
    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, fraction) = digits.split_at(digits.len() - decimals);
    let mut out: String = whole.iter().map(|&b| char::from(b)).collect();
    if !fraction.is_empty() {
        out.push('.');
        out.extend(fraction.iter().map(|&b| char::from(b)));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
