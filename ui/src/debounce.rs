// Debounced callbacks over tokio timers. Each debouncer owns its pending
// timer; scheduling through one instance never cancels another instance's
// pending call. (The original utility kept a single shared timer handle,
// which made unrelated debounced functions cancel each other.)

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays an action until `delay` has passed without another call on the
/// same instance. Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action` to run after the delay, replacing this instance's
    /// pending call if one has not fired yet.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.lock_pending();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Discards the pending call, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    // The closure inside the lock never panics, but recover from poisoning
    // anyway rather than propagating a panic out of a timer helper.
    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const SHORT: Duration = Duration::from_millis(30);
    const SETTLE: Duration = Duration::from_millis(150);

    #[tokio::test]
    async fn test_rapid_calls_coalesce_to_one() {
        let debouncer = Debouncer::new(SHORT);
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let fired = fired.clone();
            debouncer.call(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::time::sleep(SETTLE).await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_instances_do_not_cancel_each_other() {
        let save_debouncer = Debouncer::new(SHORT);
        let search_debouncer = Debouncer::new(SHORT);
        let saves = Arc::new(AtomicUsize::new(0));
        let searches = Arc::new(AtomicUsize::new(0));

        {
            let saves = saves.clone();
            save_debouncer.call(move || {
                saves.fetch_add(1, Ordering::SeqCst);
            });
        }
        {
            let searches = searches.clone();
            search_debouncer.call(move || {
                searches.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::time::sleep(SETTLE).await;

        assert_eq!(saves.load(Ordering::SeqCst), 1);
        assert_eq!(searches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_discards_pending_call() {
        let debouncer = Debouncer::new(SHORT);
        let fired = Arc::new(AtomicUsize::new(0));

        {
            let fired = fired.clone();
            debouncer.call(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();
        tokio::time::sleep(SETTLE).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_call() {
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let debouncer = Debouncer::new(SHORT);
            let fired = fired.clone();
            debouncer.call(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::time::sleep(SETTLE).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_pending_state_tracks_lifecycle() {
        let debouncer = Debouncer::new(SHORT);
        assert!(!debouncer.is_pending());

        debouncer.call(|| {});
        assert!(debouncer.is_pending());

        tokio::time::sleep(SETTLE).await;
        assert!(!debouncer.is_pending());
    }
}
