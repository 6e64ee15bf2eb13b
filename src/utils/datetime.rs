//! Date and time helpers for the dashboard widgets
//!
//! The dashboard header and smart alerts derive display text from a clock
//! reading. These functions take the hour / weekday / date as explicit
//! arguments instead of reading the clock themselves, so callers stay in
//! control and tests stay deterministic.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::constants::{
    GREETING_AFTERNOON, GREETING_EVENING, GREETING_MORNING, TIP_FRIDAY, TIP_GENERIC, TIP_MONDAY,
};

/// Select the dashboard greeting for an hour of day (0-23).
///
/// Before 12 is morning, before 18 is afternoon, everything else evening.
#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        GREETING_MORNING
    } else if hour < 18 {
        GREETING_AFTERNOON
    } else {
        GREETING_EVENING
    }
}

/// Select the rotating daily tip for a weekday.
///
/// Monday and Friday carry specific tips, all other days the generic one.
#[must_use]
pub fn tip_for_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => TIP_MONDAY,
        Weekday::Fri => TIP_FRIDAY,
        _ => TIP_GENERIC,
    }
}

/// Format a date in the long form shown in the dashboard header,
/// e.g. "Wednesday, August 27".
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    let month = match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    };
    format!("{}, {} {}", weekday, month, date.day())
}
