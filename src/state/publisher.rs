// src/state/publisher.rs
// =============================================================================
// StatePublisher<T>: the one place a LoadState lives, plus a way to watch it.
//
// Two tokio channels back it:
// - watch: keeps only the latest value, for "what is the state right now?"
// - broadcast: queues every transition, so an observer sees Loading before
//   the Loaded/Failed that follows it, even if it was slow to look
//
// Only the owner of the StatePublisher can publish. Observers get receivers,
// which are read-only by construction. Dropping a subscription unsubscribes.
//
// Rust concepts:
// - tokio::sync channels: Send values between tasks safely
// - Streams: An async iterator, built here with futures::stream::unfold
// =============================================================================

use std::sync::{Mutex, PoisonError};

use futures::stream::{self, Stream};
use tokio::sync::{broadcast, watch};
use tracing::warn;

use super::LoadState;

// How many transitions a slow subscriber may fall behind before it lags
const TRANSITION_BUFFER: usize = 64;

#[derive(Debug)]
pub struct StatePublisher<T> {
    current: watch::Sender<LoadState<T>>,
    transitions: broadcast::Sender<LoadState<T>>,
    // Keeps the watch value and the broadcast order in step
    publish_lock: Mutex<()>,
}

impl<T: Clone> StatePublisher<T> {
    pub fn new(initial: LoadState<T>) -> Self {
        let (current, _) = watch::channel(initial);
        let (transitions, _) = broadcast::channel(TRANSITION_BUFFER);
        Self {
            current,
            transitions,
            publish_lock: Mutex::new(()),
        }
    }

    /// Replaces the current state and notifies every subscriber.
    pub fn publish(&self, state: LoadState<T>) {
        let _guard = self
            .publish_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // send_replace stores the value even when nobody is watching
        self.current.send_replace(state.clone());
        // An error here only means there are no subscribers right now
        let _ = self.transitions.send(state);
    }

    /// Snapshot of the latest published state.
    pub fn current(&self) -> LoadState<T> {
        self.current.borrow().clone()
    }

    /// Every transition published from now on, in order.
    pub fn subscribe(&self) -> StateSubscription<T> {
        StateSubscription {
            rx: self.transitions.subscribe(),
        }
    }

    /// Latest-value view; intermediate states may be skipped.
    pub fn watch(&self) -> watch::Receiver<LoadState<T>> {
        self.current.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.transitions.receiver_count()
    }
}

impl<T: Clone> Default for StatePublisher<T> {
    fn default() -> Self {
        Self::new(LoadState::Idle)
    }
}

/// An ordered feed of state transitions. Drop it to unsubscribe.
#[derive(Debug)]
pub struct StateSubscription<T> {
    rx: broadcast::Receiver<LoadState<T>>,
}

impl<T: Clone> StateSubscription<T> {
    /// Waits for the next transition. `None` once the publisher is gone.
    pub async fn next(&mut self) -> Option<LoadState<T>> {
        loop {
            match self.rx.recv().await {
                Ok(state) => return Some(state),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "state subscriber fell behind; skipping old transitions");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns a queued transition without waiting, if there is one.
    pub fn try_next(&mut self) -> Option<LoadState<T>> {
        loop {
            match self.rx.try_recv() {
                Ok(state) => return Some(state),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "state subscriber fell behind; skipping old transitions");
                }
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = LoadState<T>> {
        stream::unfold(self, |mut subscription| async move {
            let state = subscription.next().await?;
            Some((state, subscription))
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. watch vs broadcast
//    - watch::channel stores one value; readers always see the newest one
//    - broadcast::channel queues up to N values; every receiver gets each one
//
// 2. What is "lagging"?
//    - If a receiver doesn't read for a while, the queue fills up
//    - The oldest values are overwritten and recv() reports how many were lost
//
// 3. What does stream::unfold do?
//    - It turns "a state + an async step function" into a Stream
//    - Here the state is the subscription and each step is next().await
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::sync::Arc;

    #[test]
    fn test_starts_idle_and_last_value_wins() {
        let publisher: StatePublisher<Vec<i64>> = StatePublisher::default();
        assert!(publisher.current().is_idle());

        publisher.publish(LoadState::Loading);
        publisher.publish(LoadState::Loaded(vec![1, 2, 3]));

        assert_eq!(publisher.current().value(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_subscribers_see_every_transition_in_order() {
        let publisher: StatePublisher<Vec<i64>> = StatePublisher::default();
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();

        publisher.publish(LoadState::Loading);
        publisher.publish(LoadState::Loaded(vec![7]));

        for sub in [&mut first, &mut second] {
            assert!(sub.try_next().unwrap().is_loading());
            assert_eq!(sub.try_next().unwrap().value(), Some(&vec![7]));
            assert!(sub.try_next().is_none());
        }
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let publisher: StatePublisher<u8> = StatePublisher::default();
        let sub = publisher.subscribe();
        assert_eq!(publisher.subscriber_count(), 1);

        drop(sub);
        assert_eq!(publisher.subscriber_count(), 0);

        // Still fine to publish with nobody listening
        publisher.publish(LoadState::Loading);
        assert!(publisher.current().is_loading());
    }

    #[test]
    fn test_lagging_subscriber_skips_ahead() {
        let publisher: StatePublisher<usize> = StatePublisher::default();
        let mut sub = publisher.subscribe();

        for n in 0..(TRANSITION_BUFFER + 10) {
            publisher.publish(LoadState::Loaded(n));
        }

        // The oldest transitions were dropped, the newest one is still there
        let first = sub.try_next().unwrap();
        assert_eq!(first.value(), Some(&10));
        let mut last = first;
        while let Some(state) = sub.try_next() {
            last = state;
        }
        assert_eq!(last.value(), Some(&(TRANSITION_BUFFER + 9)));
    }

    #[tokio::test]
    async fn test_watch_sees_latest_value() {
        let publisher: StatePublisher<&'static str> = StatePublisher::default();
        let mut rx = publisher.watch();

        publisher.publish(LoadState::Loading);
        publisher.publish(LoadState::Failed(Arc::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "no server",
        ))));

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_failed());
    }

    #[tokio::test]
    async fn test_stream_ends_when_publisher_dropped() {
        let publisher: StatePublisher<u8> = StatePublisher::default();
        let stream = publisher.subscribe().into_stream();

        publisher.publish(LoadState::Loading);
        publisher.publish(LoadState::Loaded(1));
        drop(publisher);

        let states: Vec<LoadState<u8>> = stream.collect().await;
        assert_eq!(states.len(), 2);
        assert!(states[0].is_loading());
        assert!(states[1].is_loaded());
    }
}
