//! Opening hours for a late-night deli.
//!
//! The core is [`timing`]: parsing `HH:MM` clock strings and deciding whether
//! a weekly schedule is open at a given moment, including ranges that close
//! after midnight. Around it sit the pieces the website needs at runtime:
//! periodic tasks ([`tasks`]), the explicit startup/shutdown of those tasks
//! ([`site`]) and a small JSON server ([`server`]).

pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod site;
pub mod tasks;
pub mod timing;

pub use error::{Error, Result};
pub use timing::{
    clock::parse_clock,
    evaluation_point::EvaluationPoint,
    schedule::{is_open, WeekSchedule},
    time_range::{parse_range, TimeRange},
};

pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
