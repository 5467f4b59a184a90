//! Thin browser glue used by pages.
//!
//! Each helper does the real thing in the hydrated build and degrades to a
//! no-op (or an immediate answer) elsewhere, so page code stays free of
//! `cfg` blocks and server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::future::Future;

/// Run `fut` on the browser's event loop. Off-browser the future is dropped
/// unpolled: API calls are only meaningful client-side.
pub fn spawn_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fut);
    }
}

/// Wait `ms` milliseconds in the browser; resolves immediately elsewhere.
pub async fn sleep_ms(ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Ask the user to confirm a destructive action. Off-browser nothing is
/// confirmed.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
