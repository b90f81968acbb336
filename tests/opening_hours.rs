use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use deli_hours::{is_open, parse_clock, parse_range, EvaluationPoint, TimeRange, WeekSchedule};
use proptest::prelude::*;

fn single_day(day: Weekday, range: TimeRange) -> WeekSchedule {
    let mut schedule = WeekSchedule::new();
    schedule.add_range(day, range);
    schedule
}

fn weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|i| Weekday::try_from(i).unwrap())
}

#[test]
fn parse_clock_examples() {
    assert_eq!(parse_clock("09:00").unwrap(), 540);
    assert_eq!(parse_clock("28:00").unwrap(), 1680);
    assert_eq!(parse_clock("9:5").unwrap(), 545);
    assert!(parse_clock("nine").is_err());
}

#[test]
fn friday_open_late() {
    let mut hours = HashMap::new();
    hours.insert("Friday".to_string(), vec!["09:00-28:00".to_string()]);
    let schedule = WeekSchedule::from_config(&hours).unwrap();

    let at = |day, hour, minute| {
        // 2026-10-16 is a Friday, 17th a Saturday
        let timestamp = NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        EvaluationPoint::from_naive(&timestamp)
    };

    assert!(is_open(&schedule, at(16, 23, 0)));
    assert!(is_open(&schedule, at(17, 2, 0)));
    assert!(!is_open(&schedule, at(17, 5, 0)));
}

#[test]
fn sunday_daytime() {
    let schedule = single_day(Weekday::Sun, parse_range("09:00-22:00").unwrap());
    let at = |hour: u16, minute: u16| EvaluationPoint::new(Weekday::Sun, hour * 60 + minute);

    assert!(!is_open(&schedule, at(8, 59)));
    assert!(is_open(&schedule, at(9, 0)));
    assert!(is_open(&schedule, at(21, 59)));
    assert!(!is_open(&schedule, at(22, 0)));
}

proptest! {
    #[test]
    fn same_day_range_is_half_open(
        day in weekday(),
        start in 0u16..1440,
        len in 1u16..1440,
        minute in 0u16..1440,
    ) {
        let end = (start + len).min(1439);
        prop_assume!(end > start);
        let schedule = single_day(day, TimeRange::new(start, end).unwrap());
        let expected = start <= minute && minute < end;
        prop_assert_eq!(is_open(&schedule, EvaluationPoint::new(day, minute)), expected);
        // Nothing leaks into the next day
        prop_assert!(!is_open(&schedule, EvaluationPoint::new(day.succ(), minute)));
    }

    #[test]
    fn overnight_range_covers_both_days(
        day in weekday(),
        start in 0u16..1440,
        end in 1440u16..2880,
        minute in 0u16..1440,
    ) {
        let schedule = single_day(day, TimeRange::new(start, end).unwrap());
        prop_assert_eq!(
            is_open(&schedule, EvaluationPoint::new(day, minute)),
            start <= minute
        );
        prop_assert_eq!(
            is_open(&schedule, EvaluationPoint::new(day.succ(), minute)),
            minute < end - 1440
        );
    }

    #[test]
    fn empty_schedule_is_always_closed(day in weekday(), minute in 0u16..1440) {
        prop_assert!(!is_open(&WeekSchedule::new(), EvaluationPoint::new(day, minute)));
    }

    #[test]
    fn parse_clock_matches_components(hour in 0u16..48, minute in 0u16..60) {
        let padded = format!("{:02}:{:02}", hour, minute);
        let bare = format!("{}:{}", hour, minute);
        prop_assert_eq!(parse_clock(&padded).unwrap(), hour * 60 + minute);
        prop_assert_eq!(parse_clock(&bare).unwrap(), hour * 60 + minute);
    }
}
