//! Splash Gate Component
//!
//! Wraps the page content region: shows the splash placeholder for a
//! short, fixed delay after mount, then reveals the content for the rest
//! of the page view. Unmounting before the delay elapses clears the
//! pending timeout, so the reveal never runs against a torn-down view.

use leptos::leptos_dom::helpers::set_timeout_with_handle;
use leptos::prelude::*;

use studio_core::gate::SplashGate as Gate;
use studio_core::{Result, RevealFn, RevealGuard, RevealTimer, SplashConfig, SplashError};

/// Reveal timer backed by the browser event loop (`setTimeout`)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl RevealTimer for BrowserTimer {
    fn schedule(&self, delay: std::time::Duration, reveal: RevealFn) -> Result<RevealGuard> {
        let handle = set_timeout_with_handle(reveal, delay)
            .map_err(|err| SplashError::Schedule(format!("{err:?}")))?;
        Ok(RevealGuard::new(move || handle.clear()))
    }
}

/// Splash placeholder shown while the gate is hidden
#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash-spinner"></div>
            <p class="splash-brand">"PrivGPT Studio"</p>
        </div>
    }
}

/// Gates `children` behind the splash screen for a fixed delay after mount
#[component]
pub fn SplashGate(
    /// Delay override in milliseconds; defaults to the standard splash delay
    #[prop(optional)]
    delay_ms: Option<u64>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = delay_ms.map_or_else(SplashConfig::default, SplashConfig::from_millis);
    let (gate, set_gate) = signal(Gate::new());

    let reveal = move || {
        set_gate.update(|gate| {
            gate.reveal();
        });
    };

    match BrowserTimer.schedule(config.delay, Box::new(reveal)) {
        // The guard lives inside the cleanup closure for the lifetime of
        // the component; running the closure on unmount drops it, which
        // clears a still-pending timeout.
        Ok(guard) => on_cleanup(move || guard.cancel()),
        Err(err) => {
            // Content must never stay gated on a broken timer.
            leptos::logging::error!("splash timer unavailable, revealing content: {err}");
            reveal();
        }
    }

    view! {
        <Show when=move || gate.with(Gate::is_visible) fallback=|| view! { <SplashScreen /> }>
            {children()}
        </Show>
    }
}
