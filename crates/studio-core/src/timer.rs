//! Reveal Timers
//!
//! Scheduling seam for the splash gate. A timer runs the reveal callback
//! once after a delay on its host event loop; the returned guard cancels a
//! still-pending callback when dropped. Acquire on schedule, release on
//! teardown, regardless of exit path.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, SplashError};

/// One-shot reveal callback
pub type RevealFn = Box<dyn FnOnce() + Send + 'static>;

/// Scheduling capability for the splash gate
///
/// Implementations must run `reveal` at most once, after `delay` has
/// elapsed on their event loop, and must not run it at all once the
/// returned [`RevealGuard`] has been dropped.
pub trait RevealTimer {
    fn schedule(&self, delay: Duration, reveal: RevealFn) -> Result<RevealGuard>;
}

/// Cancellation handle for a scheduled reveal
///
/// Cancels the pending reveal when dropped. Dropping the guard after the
/// timer has already fired is a no-op.
pub struct RevealGuard {
    cancel: Option<Box<dyn FnOnce() + Send + Sync + 'static>>,
}

impl RevealGuard {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel the pending reveal now (same effect as dropping the guard)
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for RevealGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for RevealGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Reveal timer backed by the current tokio runtime
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl RevealTimer for TokioTimer {
    fn schedule(&self, delay: Duration, reveal: RevealFn) -> Result<RevealGuard> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|err| SplashError::Schedule(err.to_string()))?;

        // Deadline is fixed at schedule time, not at first poll.
        let sleep = tokio::time::sleep(delay);
        let task = handle.spawn(async move {
            sleep.await;
            reveal();
        });

        tracing::debug!(?delay, "reveal scheduled");
        Ok(RevealGuard::new(move || task.abort()))
    }
}

/// Manually fired reveal timer (for development and testing)
///
/// `schedule` only stores the callback; nothing runs until
/// [`ManualTimer::fire`] is called.
#[derive(Clone, Default)]
pub struct ManualTimer {
    pending: Arc<Mutex<Option<RevealFn>>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pending reveal, if one is still scheduled
    ///
    /// Returns whether a callback actually fired.
    pub fn fire(&self) -> bool {
        let reveal = self.pending.lock().unwrap().take();
        match reveal {
            Some(reveal) => {
                reveal();
                true
            }
            None => false,
        }
    }

    /// Whether a reveal is scheduled and not yet fired or cancelled
    pub fn is_armed(&self) -> bool {
        self.pending.lock().unwrap().is_some()
    }
}

impl RevealTimer for ManualTimer {
    fn schedule(&self, _delay: Duration, reveal: RevealFn) -> Result<RevealGuard> {
        *self.pending.lock().unwrap() = Some(reveal);
        let pending = Arc::clone(&self.pending);
        Ok(RevealGuard::new(move || {
            pending.lock().unwrap().take();
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn manual_timer_fires_scheduled_reveal_once() {
        let timer = ManualTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let guard = timer
            .schedule(
                Duration::from_millis(100),
                Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        assert!(timer.is_armed());
        assert!(timer.fire());
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Already fired: nothing left to run, and the guard is a no-op.
        assert!(!timer.fire());
        drop(guard);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_guard_cancels_pending_reveal() {
        let timer = ManualTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let guard = timer
            .schedule(
                Duration::from_millis(100),
                Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        drop(guard);

        assert!(!timer.is_armed());
        assert!(!timer.fire());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn explicit_cancel_matches_drop() {
        let timer = ManualTimer::new();
        let guard = timer
            .schedule(Duration::from_millis(100), Box::new(|| {}))
            .unwrap();

        guard.cancel();
        assert!(!timer.is_armed());
    }

    #[test]
    fn tokio_timer_requires_a_runtime() {
        let err = TokioTimer
            .schedule(Duration::from_millis(100), Box::new(|| {}))
            .unwrap_err();
        assert!(matches!(err, SplashError::Schedule(_)));
    }
}
