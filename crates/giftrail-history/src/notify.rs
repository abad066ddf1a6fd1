//! Change notifier for cross-instance refresh.
//!
//! A payload-free broadcast: the signal means "history changed, re-load",
//! nothing more. Delivery is at-least-once for receivers subscribed at
//! notify time; there is no replay, so a new subscriber must `load()` once
//! on subscription, and a lagged receiver should treat `Lagged` as a
//! signal too.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// Fire-and-forget change signal. Clone-able; clones share the channel.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<()>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Broadcast a change signal and return the receiver count.
    /// Returns 0 when nobody is listening; never fails.
    pub fn notify(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Subscribe to change signals. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Number of currently subscribed receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_without_subscribers_is_noop() {
        let notifier = ChangeNotifier::new();
        assert_eq!(notifier.notify(), 0);
    }

    #[test]
    fn subscribers_receive_signals() {
        let notifier = ChangeNotifier::new();
        let mut rx = notifier.subscribe();

        assert_eq!(notifier.notify(), 1);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn clones_share_the_channel() {
        let notifier = ChangeNotifier::new();
        let clone = notifier.clone();
        let mut rx = notifier.subscribe();

        clone.notify();
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn dropping_receiver_unsubscribes() {
        let notifier = ChangeNotifier::new();
        let rx = notifier.subscribe();
        assert_eq!(notifier.receiver_count(), 1);
        drop(rx);
        assert_eq!(notifier.notify(), 0);
    }

    #[test]
    fn no_replay_for_late_subscribers() {
        let notifier = ChangeNotifier::new();
        {
            let _rx = notifier.subscribe();
            notifier.notify();
        }
        let mut late = notifier.subscribe();
        assert!(late.try_recv().is_err(), "late subscriber must see nothing");
    }
}
