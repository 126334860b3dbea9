//! Gate State
//!
//! One piece of state: is the page content visible yet? The gate is owned
//! by a single page view instance, starts `Hidden`, and transitions to
//! `Visible` exactly once. The transition is never reversed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between mount and reveal, in milliseconds
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 100;

/// Visibility state of the gated content region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Splash placeholder shown, content withheld. Initial state.
    Hidden,

    /// Content revealed. Terminal for the lifetime of the instance.
    Visible,
}

impl GateState {
    pub fn is_visible(self) -> bool {
        matches!(self, GateState::Visible)
    }
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateState::Hidden => write!(f, "hidden"),
            GateState::Visible => write!(f, "visible"),
        }
    }
}

/// One-way splash gate
///
/// Starts `Hidden`; [`SplashGate::reveal`] flips it to `Visible` and every
/// later call is a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashGate {
    state: GateState,
}

impl SplashGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Hidden,
        }
    }

    /// Flip the gate to `Visible`
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn reveal(&mut self) -> bool {
        match self.state {
            GateState::Hidden => {
                self.state = GateState::Visible;
                true
            }
            GateState::Visible => false,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }
}

impl Default for SplashGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Splash timing configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Delay between mount and reveal
    pub delay: Duration,
}

impl SplashConfig {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self::from_millis(DEFAULT_SPLASH_DELAY_MS)
    }
}
