use std::fmt::Display;

use serde::Serialize;

use crate::error::{Error, Result};

use super::clock::{format_clock, format_wall_clock, parse_clock, DAY_MINUTES};

/// An opening window within one schedule entry, in minutes since midnight.
///
/// `start` is always within the day. `end` may run up to (but not including)
/// 2880, where anything from 1440 on means the window closes after midnight
/// on the following calendar day. Inclusive start, exclusive end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: u16,
    end: u16,
}

impl TimeRange {
    pub fn new(start: u16, end: u16) -> Result<Self> {
        let range = format!("{}-{}", format_clock(start), format_clock(end));
        if start >= DAY_MINUTES {
            return Err(Error::InvalidRange {
                range,
                reason: "opening time must be before 24:00".to_string(),
            });
        }
        if end >= 2 * DAY_MINUTES {
            return Err(Error::InvalidRange {
                range,
                reason: "closing time must be before 48:00".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// A same-day window closing at or before it opens. Never open.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end >= DAY_MINUTES
    }

    /// Whether `minute` falls inside the part of the window on its own day.
    pub fn contains_same_day(&self, minute: u16) -> bool {
        let end = self.end.min(DAY_MINUTES);
        self.start <= minute && minute < end
    }

    /// Whether `minute` on the following day is still covered by this window.
    pub fn contains_carry_over(&self, minute: u16) -> bool {
        self.crosses_midnight() && minute < self.end - DAY_MINUTES
    }

    /// 12 hour rendering, e.g. `9:00 AM - 4:00 AM`.
    pub fn wall_clock(&self) -> String {
        format!(
            "{} - {}",
            format_wall_clock(self.start),
            format_wall_clock(self.end)
        )
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// Parses a `"HH:MM-HH:MM"` entry. The closing hour may be 24 or more.
pub fn parse_range(text: &str) -> Result<TimeRange> {
    let Some((start, end)) = text.split_once('-') else {
        return Err(Error::Parse(text.to_string()));
    };
    TimeRange::new(parse_clock(start)?, parse_clock(end)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_same_day_range() {
        let range = parse_range("09:00-22:00").unwrap();
        assert_eq!((range.start(), range.end()), (540, 1320));
        assert!(!range.crosses_midnight());
    }

    #[test]
    fn parses_overnight_range() {
        let range = parse_range("09:00-28:00").unwrap();
        assert_eq!((range.start(), range.end()), (540, 1680));
        assert!(range.crosses_midnight());
        assert_eq!(range.to_string(), "09:00-28:00");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(parse_range("09:00"), Err(Error::Parse(_))));
        assert!(matches!(parse_range("09:00-"), Err(Error::Parse(_))));
        assert!(matches!(parse_range("09:00-10:00-11:00"), Err(Error::Parse(_))));
    }

    #[test]
    fn rejects_out_of_contract_bounds() {
        assert!(matches!(
            parse_range("24:00-26:00"),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            parse_range("09:00-48:00"),
            Err(Error::InvalidRange { .. })
        ));
        assert!(parse_range("09:00-47:59").is_ok());
    }

    #[test]
    fn same_day_window_is_half_open() {
        let range = parse_range("09:00-22:00").unwrap();
        assert!(!range.contains_same_day(539));
        assert!(range.contains_same_day(540));
        assert!(range.contains_same_day(1319));
        assert!(!range.contains_same_day(1320));
        assert!(!range.contains_carry_over(0));
    }

    #[test]
    fn overnight_window_splits_at_midnight() {
        let range = parse_range("09:00-28:00").unwrap();
        assert!(range.contains_same_day(1439));
        assert!(range.contains_carry_over(0));
        assert!(range.contains_carry_over(239));
        assert!(!range.contains_carry_over(240));
    }

    #[test]
    fn inverted_same_day_range_is_never_open() {
        let range = parse_range("22:00-02:00").unwrap();
        assert!((0..DAY_MINUTES).all(|m| !range.contains_same_day(m)));
        assert!((0..DAY_MINUTES).all(|m| !range.contains_carry_over(m)));
        assert!(range.is_empty());
        assert!(parse_range("09:00-09:00").unwrap().is_empty());
        assert!(!parse_range("09:00-09:01").unwrap().is_empty());
        assert!(!parse_range("09:00-28:00").unwrap().is_empty());
    }

    #[test]
    fn renders_wall_clock() {
        assert_eq!(parse_range("09:00-28:00").unwrap().wall_clock(), "9:00 AM - 4:00 AM");
    }
}
