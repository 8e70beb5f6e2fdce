//! Input validation for slot DTOs.
//!
//! Dates must look like `YYYY-MM-DD` and name a real calendar day. Times are
//! 24-hour `H:MM` or `HH:MM`. A time range is valid only when its start falls
//! strictly before its end on the same day.

use chrono::{NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{SlotError, SlotResult};
use crate::models::time_slot::{DayOfWeek, TimeRange};

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid time regex")
});

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Shape-valid strings that do not name a real day (`2024-02-30`) are rejected.
pub fn parse_date(value: &str) -> SlotResult<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return Err(SlotError::validation("Date must be in YYYY-MM-DD format"));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SlotError::validation(format!("Invalid date: {value}")))
}

/// Parses a 24-hour `HH:MM` string. A single-digit hour is accepted.
pub fn parse_time(value: &str) -> SlotResult<NaiveTime> {
    let captures = TIME_RE
        .captures(value)
        .ok_or_else(|| SlotError::validation("Time must be in HH:MM format (24-hour)"))?;

    let hours: u32 = captures[1]
        .parse()
        .map_err(|_| SlotError::validation("Time must be in HH:MM format (24-hour)"))?;
    let minutes: u32 = captures[2]
        .parse()
        .map_err(|_| SlotError::validation("Time must be in HH:MM format (24-hour)"))?;

    NaiveTime::from_hms_opt(hours, minutes, 0)
        .ok_or_else(|| SlotError::validation(format!("Invalid time: {value}")))
}

pub fn parse_day_of_week(value: i32) -> SlotResult<DayOfWeek> {
    DayOfWeek::new(value)
}

/// Parses both ends of a range and checks that the start precedes the end.
pub fn parse_time_range(start_time: &str, end_time: &str) -> SlotResult<TimeRange> {
    let start = parse_time(start_time)?;
    let end = parse_time(end_time)?;
    TimeRange::new(start, end)
}

pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
