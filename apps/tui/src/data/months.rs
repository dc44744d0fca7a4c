use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::MonthRange;
use crate::error::Result;

/// Months covered by `start..=end`, wrapping past December when
/// `start > end`. Bounds outside 1..12 are an `InvalidRange`.
pub fn months_in_range(start: i64, end: i64) -> Result<BTreeSet<u32>> {
    MonthRange::new(start, end).map(|range| range.months())
}

/// Whether two month ranges share at least one month.
pub fn ranges_overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> Result<bool> {
    let a = MonthRange::new(a_start, a_end)?;
    let b = MonthRange::new(b_start, b_end)?;
    Ok(a.overlaps(&b))
}

/// Parses the date formats found in collected news.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, naive timestamps with `T` or a
/// space separator, `DD/MM/YYYY` and `YYYY/MM/DD`. Returns `None` otherwise.
pub fn parse_news_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp.date());
        }
    }
    for format in ["%d/%m/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    None
}
