//! Date operands for `DURING` clauses.
//!
//! A `DURING` operand is either a relative range token from a fixed
//! vocabulary (`LAST_30_DAYS`, `THIS_MONTH`, ...) or an absolute
//! `YYYY-MM-DD` date. Tokens are matched case-insensitively and render
//! bare in canonical uppercase; absolute dates must name a real
//! calendar day and render single-quoted, so `2024-02-29` passes and
//! `2023-02-29` does not.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};

use crate::error::{GaqlError, GaqlResult};

/// Relative date-range tokens understood by the language.
pub const DATE_RANGE_TOKENS: [&str; 15] = [
    "TODAY",
    "YESTERDAY",
    "LAST_7_DAYS",
    "LAST_14_DAYS",
    "LAST_30_DAYS",
    "LAST_BUSINESS_WEEK",
    "LAST_WEEK_MON_SUN",
    "LAST_WEEK_SUN_SAT",
    "THIS_WEEK_MON_TODAY",
    "THIS_WEEK_SUN_TODAY",
    "THIS_MONTH",
    "LAST_MONTH",
    "THIS_QUARTER",
    "LAST_QUARTER",
    "ALL_TIME",
];

fn date_shape() -> &'static regex::Regex {
    static DATE_RE: OnceLock<regex::Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| {
        regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid built-in date regex")
    })
}

/// Return the canonical uppercase form of a relative range token, if
/// the input is one (matched case-insensitively).
pub fn canonical_token(value: &str) -> Option<&'static str> {
    DATE_RANGE_TOKENS
        .iter()
        .find(|t| t.eq_ignore_ascii_case(value))
        .copied()
}

/// Check whether a value is a relative range token.
pub fn is_relative_token(value: &str) -> bool {
    canonical_token(value).is_some()
}

/// Check whether a value is a real `YYYY-MM-DD` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    if !date_shape().is_match(value) {
        return false;
    }
    let Some((year, month, day)) = split_ymd(value) else {
        return false;
    };
    is_real_calendar_date(year, month, day)
}

fn split_ymd(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

/// The components must construct a date and survive it unchanged.
fn is_real_calendar_date(year: i32, month: u32, day: u32) -> bool {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d.year() == year && d.month() == month && d.day() == day,
        None => false,
    }
}

/// Validate a `DURING` operand and return its rendered form.
///
/// Relative tokens render bare (`LAST_30_DAYS`), absolute dates render
/// quoted (`'2024-01-31'`). Anything else is a validation error naming
/// the offending value.
pub fn validate_date_value(value: &str) -> GaqlResult<String> {
    if let Some(token) = canonical_token(value) {
        return Ok(token.to_string());
    }
    if is_valid_date(value) {
        return Ok(format!("'{value}'"));
    }
    Err(GaqlError::validation(
        "a relative range token like LAST_30_DAYS or a real YYYY-MM-DD date",
        format!("'{value}'"),
    ))
}
