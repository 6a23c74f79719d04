//! Fixed-format `YYYY-MM-DD` date helpers.
//!
//! Due dates are persisted as zero-padded text so that plain string ordering
//! matches calendar ordering. Everything above the storage layer works with
//! [`NaiveDate`] and goes through [`format_iso_date`] / [`parse_iso_date`].

use chrono::{Duration, Months, NaiveDate};

use crate::{ClientError, ClientResult};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const WEEK_WINDOW_DAYS: i64 = 7;

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Lenient parse used when decoding stored rows.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Strict parse for user input, reporting which field was wrong.
pub fn parse_iso_date_strict(value: &str, field_name: &str) -> ClientResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(ClientError::invalid_argument(&format!(
            "`{field_name}` must use YYYY-MM-DD format with a real calendar date."
        )));
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|_| {
        ClientError::invalid_argument(&format!(
            "`{field_name}` must use YYYY-MM-DD format with valid calendar values."
        ))
    })
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Inclusive `[today, today + 7 days]`.
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, add_days(today, WEEK_WINDOW_DAYS))
}

/// Inclusive `[today, today + 1 calendar month]`. The end day is clamped to
/// the target month's length (Jan 31 ends on Feb 28, or Feb 29 in a leap year).
pub fn month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
    (today, end)
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
