use std::sync::Arc;

use chrono::Weekday;
use chrono_tz::Tz;
use tokio::time::Duration;

use crate::{
    config::Config,
    error::Result,
    tasks::{headline::HeadlineRotator, periodic::PeriodicTask, status_monitor::StatusMonitor},
    timing::{evaluation_point::parse_day, local_now::parse_timezone, schedule::WeekSchedule},
};

/// Everything the page needs at runtime, built from a validated config.
///
/// Cloned into every connection handler. Holds no task handles; those stay
/// with `Site`.
#[derive(Clone, Debug)]
pub struct SiteState {
    pub schedule: Arc<WeekSchedule>,
    pub timezone: Tz,
    pub display_start: Weekday,
    pub headlines: HeadlineRotator,
}

impl SiteState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            schedule: Arc::new(WeekSchedule::from_config(&config.hours)?),
            timezone: parse_timezone(&config.timezone)?,
            display_start: parse_day(&config.display_start)?,
            headlines: HeadlineRotator::new(config.headlines.messages.clone()),
        })
    }
}

/// The running site: shared state plus the periodic tasks that drive it.
pub struct Site {
    state: SiteState,
    tasks: Vec<PeriodicTask>,
}

impl Site {
    /// Validates `config` and starts headline rotation and status monitoring.
    /// Must be called inside a tokio runtime.
    pub fn start(config: &Config) -> Result<Self> {
        let state = SiteState::from_config(config)?;
        let mut tasks = Vec::new();

        // A period of zero turns the task off
        if config.headlines.interval_secs > 0 {
            let period = Duration::from_secs(config.headlines.interval_secs);
            if let Some(task) = state.headlines.start(period) {
                tasks.push(task);
            }
        }
        if config.status_refresh_secs > 0 {
            let monitor = StatusMonitor::new(state.schedule.clone());
            tasks.push(monitor.start(
                state.timezone,
                Duration::from_secs(config.status_refresh_secs),
            ));
        }

        tracing::info!(tasks = tasks.len(), timezone = %state.timezone, "Site started");
        Ok(Self { state, tasks })
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    /// Stops every periodic task and waits for them to finish.
    pub async fn shutdown(self) {
        for task in self.tasks {
            let name = task.name();
            task.stop().await;
            tracing::info!(task = name, "Stopped");
        }
    }
}
