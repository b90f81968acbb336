use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::time::Duration;

use super::periodic::PeriodicTask;

/// Cycles through the hero headlines.
///
/// Cheap to clone; clones share the same position.
#[derive(Clone, Debug)]
pub struct HeadlineRotator {
    messages: Arc<[String]>,
    index: Arc<AtomicUsize>,
}

impl HeadlineRotator {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            messages: messages.into(),
            index: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// `None` when there is nothing to show.
    pub fn current(&self) -> Option<&str> {
        if self.messages.is_empty() {
            return None;
        }
        let index = self.index.load(Ordering::Relaxed) % self.messages.len();
        Some(&self.messages[index])
    }

    pub fn advance(&self) {
        if self.messages.is_empty() {
            return;
        }
        let len = self.messages.len();
        self.index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len))
            .ok();
    }

    /// Starts rotating every `period`. Returns `None` if there are no messages.
    pub fn start(&self, period: Duration) -> Option<PeriodicTask> {
        if self.messages.is_empty() {
            return None;
        }
        let rotator = self.clone();
        Some(PeriodicTask::spawn("headline", period, move || {
            rotator.advance();
            tracing::trace!(headline = rotator.current(), "Rotated headline");
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator() -> HeadlineRotator {
        HeadlineRotator::new(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    }

    #[test]
    fn advances_and_wraps() {
        let rotator = rotator();
        assert_eq!(rotator.current(), Some("a"));
        rotator.advance();
        assert_eq!(rotator.current(), Some("b"));
        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.current(), Some("a"));
    }

    #[test]
    fn clones_share_position() {
        let rotator = rotator();
        let other = rotator.clone();
        other.advance();
        assert_eq!(rotator.current(), Some("b"));
    }

    #[test]
    fn empty_rotator_has_nothing_to_show() {
        let rotator = HeadlineRotator::new(Vec::new());
        rotator.advance();
        assert_eq!(rotator.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn rotates_on_schedule() {
        let rotator = rotator();
        let task = rotator.start(Duration::from_secs(4)).unwrap();

        tokio::time::sleep(Duration::from_millis(4_100)).await;
        assert_eq!(rotator.current(), Some("b"));
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(rotator.current(), Some("c"));

        task.stop().await;
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(rotator.current(), Some("c"));
    }

    #[tokio::test]
    async fn no_task_without_messages() {
        assert!(HeadlineRotator::new(Vec::new()).start(Duration::from_secs(1)).is_none());
    }
}
