use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Weekday};

use crate::error::{Error, Result};

/// Days in the order the schedule stores them.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Parses one of the seven full day names, ignoring case.
pub fn parse_day(name: &str) -> Result<Weekday> {
    WEEK.into_iter()
        .find(|day| day_name(*day).eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::UnknownDay(name.to_string()))
}

/// A moment to evaluate the schedule at: a weekday and minutes since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvaluationPoint {
    day: Weekday,
    minute: u16,
}

impl EvaluationPoint {
    pub fn new(day: Weekday, minute: u16) -> Self {
        Self { day, minute }
    }

    pub fn from_datetime<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self::from_naive(&timestamp.naive_local())
    }

    /// Uses the wall clock reading as is, with no timezone conversion.
    pub fn from_naive(timestamp: &NaiveDateTime) -> Self {
        let minute = timestamp.hour() * 60 + timestamp.minute();
        Self {
            day: timestamp.weekday(),
            minute: minute as u16,
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn minute(&self) -> u16 {
        self.minute
    }
}
