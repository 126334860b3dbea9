//! # studio-core
//!
//! Splash gate for PrivGPT Studio: the transient loading placeholder shown
//! for a short, fixed delay before page content renders.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SplashController                         │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐ │
//! │  │  SplashGate │  │  RevealTimer │  │    RevealGuard      │ │
//! │  │   Hidden ──►│◄─│  (one-shot)  │─►│ (cancel on drop)    │ │
//! │  │   Visible   │  │              │  │                     │ │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `RevealTimer` trait decouples the gate from its host event loop:
//! `TokioTimer` drives it on a tokio runtime, while the web frontend
//! supplies a browser `setTimeout` implementation. Whichever host runs it,
//! the contract is the same: the gate starts `Hidden`, flips to `Visible`
//! exactly once when the timer fires, and tearing the instance down first
//! cancels the pending reveal so no stale callback can touch state.

pub mod controller;
pub mod error;
pub mod gate;
pub mod timer;

pub use controller::SplashController;
pub use error::{Result, SplashError};
pub use gate::{DEFAULT_SPLASH_DELAY_MS, GateState, SplashConfig, SplashGate};
pub use timer::{ManualTimer, RevealFn, RevealGuard, RevealTimer, TokioTimer};
