//! Reading keys of the meter API.
//!
//! Hourly series come with short keys like `07/15 17:00`, which lack the year.
//! Quarter-hour series carry full timestamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::ops::DateRange;

const FULL_FORMATS: [&str; 5] = [
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse the reading key, inferring the missing year from the requested range.
#[must_use]
pub fn parse_key(key: &str, range: DateRange) -> Option<NaiveDateTime> {
    let key = key.trim();
    FULL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(key, format).ok())
        .or_else(|| parse_short_key(key, range))
}

/// `MM/DD HH` or `MM/DD HH:MM`, leading zeros are optional.
fn parse_short_key(key: &str, range: DateRange) -> Option<NaiveDateTime> {
    let (date, time) = key.split_once(' ')?;
    let (month, day) = date.split_once('/')?;
    let date: NaiveDate = range.resolve_date(month.parse().ok()?, day.parse().ok()?)?;
    let (hour, minute) = time.trim().split_once(':').unwrap_or((time.trim(), "0"));
    let time = NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)?;
    Some(date.and_time(time))
}
