//! Strict `YYYY-MM-DD` date parsing.
//!
//! Both the record checks and the store boundary parse dates through here, so
//! the accepted format is defined once.

use crate::model::validation::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Wire format for every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts unpadded months/days; the column contract is zero-padded.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid iso date regex"));

/// Parses `value` as a zero-padded calendar date.
///
/// # Errors
/// - `ValidationError::InvalidDate` naming `field` when the shape is wrong or
///   the date does not exist (e.g. `2023-02-29`, or anything in year `0000`).
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    };

    if !ISO_DATE_RE.is_match(value) {
        return Err(invalid());
    }
    let parsed = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    if parsed.year() < 1 {
        return Err(invalid());
    }
    Ok(parsed)
}
