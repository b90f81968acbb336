use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use tokio::time::Duration;

use crate::timing::{
    evaluation_point::{day_name, EvaluationPoint},
    local_now::local_now,
    schedule::WeekSchedule,
};

use super::periodic::PeriodicTask;

/// Re-evaluates the schedule and logs whenever the business opens or closes.
pub struct StatusMonitor {
    schedule: Arc<WeekSchedule>,
    last: Option<bool>,
}

impl StatusMonitor {
    pub fn new(schedule: Arc<WeekSchedule>) -> Self {
        Self {
            schedule,
            last: None,
        }
    }

    /// Evaluates at `timestamp`. Returns the new status if it changed since
    /// the previous observation.
    pub fn observe(&mut self, timestamp: DateTime<Tz>) -> Option<bool> {
        let point = EvaluationPoint::from_datetime(&timestamp);
        let open = self.schedule.is_open(point);
        if self.last == Some(open) {
            return None;
        }
        self.last = Some(open);
        tracing::info!(
            day = day_name(point.day()),
            minute = point.minute(),
            "Business is now {}",
            if open { "open" } else { "closed" }
        );
        Some(open)
    }

    /// Observes now, then again every `period` on the restaurant's clock.
    pub fn start(self, timezone: Tz, period: Duration) -> PeriodicTask {
        self.start_with_clock(period, move || local_now(timezone))
    }

    pub fn start_with_clock<C>(mut self, period: Duration, mut clock: C) -> PeriodicTask
    where
        C: FnMut() -> DateTime<Tz> + Send + 'static,
    {
        self.observe(clock());
        PeriodicTask::spawn("status", period, move || {
            self.observe(clock());
        })
    }
}
