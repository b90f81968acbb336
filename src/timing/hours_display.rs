use chrono::Weekday;
use serde::Serialize;

use super::{evaluation_point::day_name, schedule::WeekSchedule};

const TODAY_MARKER: &str = "(today)";

/// One row of the weekly hours list shown on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HoursLine {
    pub day: String,
    pub hours: String,
    pub today: bool,
}

/// The seven days starting from `first`.
pub fn display_order(first: Weekday) -> [Weekday; 7] {
    let mut order = [first; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Builds the hours list in display order with today's row highlighted.
pub fn hours_lines(schedule: &WeekSchedule, first: Weekday, today: Weekday) -> Vec<HoursLine> {
    let lines = display_order(first)
        .into_iter()
        .map(|day| HoursLine {
            day: day_name(day).to_string(),
            hours: describe_day(schedule, day),
            today: false,
        })
        .collect();
    annotate(lines, first, today)
}

/// Marks the row for `today` and appends " (today)" to its label.
///
/// `lines` are expected in display order starting at `first`. The marker is
/// never added twice, so annotating an already annotated list is a no-op.
pub fn annotate(mut lines: Vec<HoursLine>, first: Weekday, today: Weekday) -> Vec<HoursLine> {
    let index = display_order(first).iter().position(|day| *day == today);
    let Some(line) = index.and_then(|index| lines.get_mut(index)) else {
        return lines;
    };
    line.today = true;
    if !line.day.to_lowercase().contains(TODAY_MARKER) {
        line.day = format!("{} {}", line.day.trim_end(), TODAY_MARKER);
    }
    lines
}

// Empty windows never open, so they are left out of the listing.
fn describe_day(schedule: &WeekSchedule, day: Weekday) -> String {
    let ranges: Vec<String> = schedule
        .ranges(day)
        .iter()
        .filter(|range| !range.is_empty())
        .map(|range| range.wall_clock())
        .collect();
    if ranges.is_empty() {
        return "Closed".to_string();
    }
    ranges.join(", ")
}
