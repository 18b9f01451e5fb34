//! Date utilities for daily reset hour handling.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};

/// Get adjusted "today" based on daily_reset_hour.
///
/// Before the reset hour it is still "yesterday" from a study perspective,
/// so a late-night session counts towards the previous day.
pub fn get_adjusted_today(daily_reset_hour: u32) -> NaiveDate {
    adjusted_date(Local::now().naive_local(), daily_reset_hour)
}

fn adjusted_date(now: NaiveDateTime, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date()
    } else {
        now.date()
    }
}
