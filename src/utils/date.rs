use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Canonical storage format for calendar days ("YYYY-MM-DD").
pub const DAY_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    normalize(Local::now())
}

/// Truncate any timestamp to its calendar day in the local timezone.
///
/// This is the single normalization point for completion dates: every
/// date that reaches the records or perfect-day tables goes through here,
/// so "same day" comparisons can never disagree about the time-of-day.
pub fn normalize(ts: DateTime<Local>) -> NaiveDate {
    ts.date_naive()
}

/// Weekday index of a date, Monday-first: Mon=0 .. Sun=6.
///
/// The calendar's native numbering starts the week on Sunday; schedules
/// are stored Monday-first, so conversions go through this one function.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DAY_FMT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FMT).to_string()
}
