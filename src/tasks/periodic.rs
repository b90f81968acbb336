use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{sleep_until, Duration, Instant},
};

/// A callback run on a fixed period until stopped.
///
/// The first tick happens one period after spawning. Dropping the handle
/// ends the loop as well; `stop` additionally waits for it to finish.
pub struct PeriodicTask {
    name: &'static str,
    stop: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    pub fn spawn<F>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop, mut stopped) = watch::channel(false);
        let handle = tokio::spawn(async move {
            tracing::debug!(task = name, ?period, "Periodic task started");
            let mut next = Instant::now() + period;
            loop {
                tokio::select! {
                    _ = sleep_until(next) => {
                        tick();
                        next += period;
                    }
                    // Either a stop signal or the handle was dropped
                    _ = stopped.changed() => break,
                }
            }
            tracing::debug!(task = name, "Periodic task finished");
        });
        Self { name, stop, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Signals the loop to end and waits for it.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        if let Err(err) = self.handle.await {
            tracing::warn!(task = self.name, "Periodic task ended abnormally: {}", err);
        }
    }
}
