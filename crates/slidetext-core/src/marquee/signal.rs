//! "Application resumed" notification
//!
//! Hosts call [`ResumeSignal::notify_resumed`] when the process comes back to
//! the foreground (terminal focus regained, window shown...). Each marquee
//! holds a [`Subscription`]; dropping it unsubscribes.

use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 16;

/// Broadcast hub for resume notifications
#[derive(Debug, Clone)]
pub struct ResumeSignal {
    tx: broadcast::Sender<()>,
}

impl Default for ResumeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Notify every live subscriber. Returns how many were reached.
    pub fn notify_resumed(&self) -> usize {
        // Err only means there are no subscribers
        let reached = self.tx.send(()).unwrap_or(0);
        debug!(subscribers = reached, "resume signal sent");
        reached
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Scoped subscription to a [`ResumeSignal`]
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<()>,
}

impl Subscription {
    /// Drain queued notifications without blocking.
    /// Several resumes since the last call collapse into one.
    pub fn take_pending(&mut self) -> bool {
        let mut resumed = false;
        loop {
            match self.rx.try_recv() {
                Ok(()) | Err(broadcast::error::TryRecvError::Lagged(_)) => resumed = true,
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => return resumed,
            }
        }
    }

    /// Wait for the next notification. Returns `false` once the hub is gone.
    pub async fn resumed(&mut self) -> bool {
        match self.rx.recv().await {
            Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => true,
            Err(broadcast::error::RecvError::Closed) => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        debug!("resume subscription released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn test_drop_unsubscribes() {
        let signal = ResumeSignal::new();
        let sub = signal.subscribe();
        assert_eq!(signal.subscriber_count(), 1);
        drop(sub);
        assert_eq!(signal.subscriber_count(), 0);
        assert_eq!(signal.notify_resumed(), 0);
    }

    #[test]
    fn test_pending_notifications_coalesce() {
        let signal = ResumeSignal::new();
        let mut sub = signal.subscribe();
        assert!(!sub.take_pending());

        signal.notify_resumed();
        signal.notify_resumed();
        assert!(sub.take_pending());
        assert!(!sub.take_pending());
    }

    #[test]
    fn test_overflow_still_reports_resume() {
        let signal = ResumeSignal::new();
        let mut sub = signal.subscribe();
        for _ in 0..(CHANNEL_CAPACITY * 2) {
            signal.notify_resumed();
        }
        assert!(sub.take_pending());
        assert!(!sub.take_pending());
    }

    #[tokio::test]
    async fn test_async_wait() {
        let signal = ResumeSignal::new();
        let mut sub = signal.subscribe();

        let sender = signal.clone();
        tokio::spawn(async move {
            sender.notify_resumed();
        });

        let result = timeout(Duration::from_secs(1), sub.resumed()).await;
        assert_eq!(result.ok(), Some(true));

        drop(signal);
        // the spawned clone is gone too once the task finished
        let closed = timeout(Duration::from_secs(1), sub.resumed()).await;
        assert_eq!(closed.ok(), Some(false));
    }
}
