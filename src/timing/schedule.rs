use std::collections::HashMap;

use chrono::Weekday;

use crate::error::Result;

use super::{
    evaluation_point::{parse_day, EvaluationPoint},
    time_range::{parse_range, TimeRange},
};

/// The weekly opening hours.
///
/// Each day holds any number of `TimeRange`s. A range closing after midnight
/// keeps the business open into the early hours of the next calendar day, so
/// evaluating a point looks at its own day and at the day before.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    timings: [Vec<TimeRange>; 7],
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from day names mapped to `"HH:MM-HH:MM"` entries.
    ///
    /// Days left out are closed. Fails on the first unknown day name or
    /// malformed entry.
    pub fn from_config(hours: &HashMap<String, Vec<String>>) -> Result<Self> {
        let mut schedule = Self::new();
        for (day, ranges) in hours {
            let day = parse_day(day)?;
            for range in ranges {
                schedule.add_range(day, parse_range(range)?);
            }
        }
        Ok(schedule)
    }

    pub fn add_range(&mut self, day: Weekday, range: TimeRange) {
        self.timings[day.num_days_from_sunday() as usize].push(range);
    }

    pub fn ranges(&self, day: Weekday) -> &[TimeRange] {
        &self.timings[day.num_days_from_sunday() as usize]
    }

    pub fn is_open(&self, point: EvaluationPoint) -> bool {
        let minute = point.minute();
        let tonight = self
            .ranges(point.day())
            .iter()
            .any(|range| range.contains_same_day(minute));
        if tonight {
            return true;
        }
        self.ranges(point.day().pred())
            .iter()
            .any(|range| range.contains_carry_over(minute))
    }
}

/// Whether the business is open at `point` under `schedule`.
pub fn is_open(schedule: &WeekSchedule, point: EvaluationPoint) -> bool {
    schedule.is_open(point)
}
