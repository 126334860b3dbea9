//! Splash Controller
//!
//! Composes a [`RevealTimer`] with the gate state behind a watch channel.
//! The controller owns the cancellation guard for the scheduled reveal, so
//! dropping it cancels a pending reveal and no stale callback can mutate
//! state after teardown.

use tokio::sync::watch;

use crate::error::Result;
use crate::gate::{GateState, SplashConfig};
use crate::timer::{RevealGuard, RevealTimer};

/// Drives one splash gate instance
pub struct SplashController {
    state: watch::Receiver<GateState>,
    _timer: RevealGuard,
}

impl SplashController {
    /// Schedule the reveal and return the running controller
    pub fn start<T: RevealTimer>(timer: &T, config: SplashConfig) -> Result<Self> {
        let (tx, state) = watch::channel(GateState::Hidden);
        let timer = timer.schedule(
            config.delay,
            Box::new(move || {
                let _ = tx.send(GateState::Visible);
            }),
        )?;

        Ok(Self {
            state,
            _timer: timer,
        })
    }

    /// Current gate state
    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    /// Watch the gate state, e.g. to await the reveal from another task
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.clone()
    }

    /// Wait until the gate is visible
    ///
    /// Returns the final observed state; `Hidden` means the timer was
    /// cancelled before it fired.
    pub async fn revealed(&mut self) -> GateState {
        loop {
            let current = *self.state.borrow_and_update();
            if current.is_visible() {
                return current;
            }
            if self.state.changed().await.is_err() {
                return *self.state.borrow();
            }
        }
    }
}

impl std::fmt::Debug for SplashController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplashController")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time;

    use super::*;
    use crate::timer::{ManualTimer, TokioTimer};

    #[tokio::test(start_paused = true)]
    async fn hidden_before_delay_visible_after() {
        let controller = SplashController::start(&TokioTimer, SplashConfig::default()).unwrap();
        assert_eq!(controller.state(), GateState::Hidden);

        // t = 50ms: still inside the 100ms delay.
        time::advance(Duration::from_millis(50)).await;
        tokio::task::yield_now().await;
        assert_eq!(controller.state(), GateState::Hidden);

        // t = 150ms: the timer fired and the gate stays visible.
        time::advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert!(controller.is_visible());

        time::advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert!(controller.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_before_delay_cancels_reveal() {
        let controller = SplashController::start(&TokioTimer, SplashConfig::default()).unwrap();
        let state = controller.subscribe();

        // Tear down at t = 10ms, well before the 100ms deadline.
        time::advance(Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        drop(controller);

        // t = 150ms: no residual callback effect.
        time::advance(Duration::from_millis(140)).await;
        tokio::task::yield_now().await;
        assert_eq!(*state.borrow(), GateState::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn revealed_resolves_once_timer_fires() {
        let mut controller =
            SplashController::start(&TokioTimer, SplashConfig::from_millis(250)).unwrap();
        assert_eq!(controller.revealed().await, GateState::Visible);
    }

    #[test]
    fn manual_timer_drives_the_gate() {
        let timer = ManualTimer::new();
        let controller = SplashController::start(&timer, SplashConfig::default()).unwrap();

        assert!(!controller.is_visible());
        assert!(timer.fire());
        assert!(controller.is_visible());

        // One-shot: a second fire has nothing to run.
        assert!(!timer.fire());
        assert!(controller.is_visible());
    }

    #[test]
    fn dropping_controller_disarms_manual_timer() {
        let timer = ManualTimer::new();
        let controller = SplashController::start(&timer, SplashConfig::default()).unwrap();
        let state = controller.subscribe();

        drop(controller);

        assert!(!timer.is_armed());
        assert!(!timer.fire());
        assert_eq!(*state.borrow(), GateState::Hidden);
    }
}
