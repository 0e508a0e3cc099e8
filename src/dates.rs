//! Date parsing and month bucketing for `day/month/year` formatted records.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

/// Sentinel for unparseable dates. Malformed records bucket and sort
/// deterministically instead of aborting a derivation pass.
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Parses a `day/month/year` date string; empty or malformed input
/// yields the epoch sentinel.
pub fn parse_br_date(raw: &str) -> NaiveDate {
    let trimmed = raw.trim();
    match NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        Ok(date) => date,
        Err(_) => {
            if !trimmed.is_empty() {
                warn!(value = trimmed, "unparseable date normalized to epoch sentinel");
            }
            epoch()
        }
    }
}

/// Calendar-month span between two dates; may be zero or negative.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    i64::from(end.year() - start.year()) * 12
        + i64::from(end.month() as i32 - start.month() as i32)
}

/// True when `date` falls inside the given month/year bucket.
pub fn in_month(date: NaiveDate, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}

/// The month/year bucket immediately before the given one.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}
