use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Minutes in a calendar day.
pub const DAY_MINUTES: u16 = 24 * 60;

// Hours may run past 23 to express closing times after midnight ("28:00").
static CLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{1,2})$").unwrap());

/// Converts `"HH:MM"` into minutes since local midnight.
///
/// Hours are one or more digits and may exceed 23. Minutes are one or two
/// digits and need not be zero-padded, so `"9:5"` is 545. No range check is
/// done here; `"27:75"` is simply 1695.
pub fn parse_clock(text: &str) -> Result<u16> {
    let parse_error = || Error::Parse(text.to_string());

    let captures = CLOCK_REGEX.captures(text.trim()).ok_or_else(parse_error)?;
    let hour: u16 = captures[1].parse().map_err(|_| parse_error())?;
    let minute: u16 = captures[2].parse().map_err(|_| parse_error())?;

    hour.checked_mul(60)
        .and_then(|minutes| minutes.checked_add(minute))
        .ok_or_else(parse_error)
}

/// Renders minutes since midnight as `HH:MM`, keeping hours past 23.
pub fn format_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Renders minutes as a 12 hour wall clock time, wrapping past midnight.
pub fn format_wall_clock(minutes: u16) -> String {
    let minutes = minutes % DAY_MINUTES;
    let (hour, minute) = (minutes / 60, minutes % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour, minute, suffix)
}
