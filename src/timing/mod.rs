pub mod clock;
pub mod evaluation_point;
pub mod hours_display;
pub mod local_now;
pub mod schedule;
pub mod time_range;
