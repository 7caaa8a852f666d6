//! Observable read counter with delayed, fire-and-forget increments.
//!
//! The count lives in a `tokio::sync::watch` channel. Each [`ReadCounter::mark_read`]
//! spawns a task that sleeps for the confirmation delay and then bumps the value
//! with `send_modify`, which serializes writers, so increments that complete at
//! the same instant on different worker threads are never lost.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Default delay between `mark_read` and the increment becoming visible.
pub const DEFAULT_READ_DELAY: Duration = Duration::from_millis(300);

/// Stream of read-count values. Yields the current value first.
///
/// Follows watch-channel semantics: an observer that falls behind skips
/// straight to the latest value rather than replaying every intermediate one.
pub type ReadCountStream = WatchStream<u64>;

/// Session-scoped count of "read" confirmations.
///
/// Clones share the same count.
#[derive(Clone)]
pub struct ReadCounter {
    value: Arc<watch::Sender<u64>>,
    pending: Arc<AtomicUsize>,
    delay: Duration,
    runtime: Handle,
}

impl ReadCounter {
    /// Create a counter starting at zero whose delayed increments run on `runtime`.
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        let (tx, _rx) = watch::channel(0u64);
        Self {
            value: Arc::new(tx),
            pending: Arc::new(AtomicUsize::new(0)),
            delay,
            runtime,
        }
    }

    /// Schedule one increment after the configured delay.
    ///
    /// Returns immediately. Every call is applied exactly once.
    pub fn mark_read(&self) {
        let value = Arc::clone(&self.value);
        let pending = Arc::clone(&self.pending);
        let delay = self.delay;

        let queued = pending.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(pending = queued, delay_ms = delay.as_millis() as u64, "Read scheduled");

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            value.send_modify(|count| *count += 1);
            pending.fetch_sub(1, Ordering::SeqCst);
            tracing::debug!(count = *value.borrow(), "Read confirmed");
        });
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        *self.value.borrow()
    }

    /// Increments scheduled but not yet applied.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Observe the count: the current value now, then each change.
    pub fn observe(&self) -> ReadCountStream {
        WatchStream::new(self.value.subscribe())
    }
}

impl std::fmt::Debug for ReadCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadCounter")
            .field("value", &self.get())
            .field("pending", &self.pending())
            .field("delay", &self.delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use tokio::time::{self, Instant};

    fn counter() -> ReadCounter {
        ReadCounter::new(DEFAULT_READ_DELAY, Handle::current())
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_at_zero() {
        let counter = counter();
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mark_read_returns_before_increment() {
        let counter = counter();
        let start = Instant::now();
        counter.mark_read();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.pending(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_increment_lands_after_delay() {
        let counter = counter();
        counter.mark_read();

        time::sleep(Duration::from_millis(299)).await;
        assert_eq!(counter.get(), 0);

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(counter.get(), 1);
        assert_eq!(counter.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_applies_every_increment_once() {
        let counter = counter();
        for _ in 0..25 {
            counter.mark_read();
        }
        assert_eq!(counter.pending(), 25);

        time::sleep(DEFAULT_READ_DELAY * 2).await;
        assert_eq!(counter.get(), 25);
        assert_eq!(counter.pending(), 0);

        time::sleep(DEFAULT_READ_DELAY * 4).await;
        assert_eq!(counter.get(), 25);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observe_yields_current_value_first() {
        let counter = counter();
        counter.mark_read();
        time::sleep(DEFAULT_READ_DELAY * 2).await;

        let mut observed = counter.observe();
        assert_eq!(observed.next().await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_observe_sees_later_changes() {
        let counter = counter();
        let mut observed = counter.observe();
        assert_eq!(observed.next().await, Some(0));

        counter.mark_read();
        assert_eq!(observed.next().await, Some(1));

        counter.mark_read();
        assert_eq!(observed.next().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_count() {
        let counter = counter();
        let other = counter.clone();
        other.mark_read();
        time::sleep(DEFAULT_READ_DELAY * 2).await;
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_concurrent_increments_on_worker_threads() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_time()
            .build()
            .unwrap();

        let counter = ReadCounter::new(Duration::from_millis(5), runtime.handle().clone());
        for _ in 0..200 {
            counter.mark_read();
        }

        runtime.block_on(async {
            let deadline = Instant::now() + Duration::from_secs(5);
            while (counter.get() < 200 || counter.pending() > 0) && Instant::now() < deadline {
                time::sleep(Duration::from_millis(10)).await;
            }
        });

        assert_eq!(counter.get(), 200);
        assert_eq!(counter.pending(), 0);
    }
}
