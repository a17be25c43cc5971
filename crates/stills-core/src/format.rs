//! Display strings for time and date chips.
//!
//! Formatting is a pure function of the value and the clock style, so the
//! same value always renders to the same string.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Error, Result};
use crate::models::ClockStyle;

const TWELVE_HOUR_FORMAT: &str = "%-I:%M %p";
const TWENTY_FOUR_HOUR_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Short time string: `2:30 PM`, or `14:30` on a 24-hour clock.
#[must_use]
pub fn format_time(time: NaiveTime, clock: ClockStyle) -> String {
    let pattern = match clock {
        ClockStyle::TwelveHour => TWELVE_HOUR_FORMAT,
        ClockStyle::TwentyFourHour => TWENTY_FOUR_HOUR_FORMAT,
    };
    time.format(pattern).to_string()
}

/// Medium date string: `Apr 15, 2025`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse `14:30`, `14:30:15` or `2:30 PM`.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    ["%H:%M", "%H:%M:%S", "%I:%M %p"]
        .iter()
        .find_map(|pattern| NaiveTime::parse_from_str(value, pattern).ok())
        .ok_or_else(|| Error::InvalidInput(format!("unrecognized time '{value}'")))
}

/// Parse `2025-04-15` or `Apr 15, 2025`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    ["%Y-%m-%d", "%b %d, %Y"]
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(value, pattern).ok())
        .ok_or_else(|| Error::InvalidInput(format!("unrecognized date '{value}'")))
}
