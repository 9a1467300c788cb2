//! Fill timestamp stamping and order sizing configuration.
//!
//! A transition detected at bar i fills at bar i+1; the fill timestamp is
//! that bar's date combined with a configured time-of-day, localized to a
//! configured timezone. Duration arithmetic strips the timezone first so a
//! DST shift inside a holding period cannot change the day count.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Fixed execution parameters shared by every simulated fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionConfig {
    pub quantity: i64,
    pub timezone: Tz,
    pub time: NaiveTime,
}

/// Combine a bar date with the configured time-of-day and localize it.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant; a
/// nonexistent local time (DST gap) falls back to reading the wall clock
/// as UTC.
pub fn execution_timestamp(date: NaiveDate, config: &ExecutionConfig) -> DateTime<Tz> {
    let wall = date.and_time(config.time);
    match config.timezone.from_local_datetime(&wall) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => config.timezone.from_utc_datetime(&wall),
    }
}

/// Whole calendar days between two fill stamps, timezones stripped.
pub fn days_between(entry: &DateTime<Tz>, exit: &DateTime<Tz>) -> i64 {
    (exit.naive_local() - entry.naive_local()).num_days()
}
