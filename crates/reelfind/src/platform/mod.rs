//! Platform-specific timing.
//!
//! - **Desktop**: `tokio::time` on the runtime Dioxus already drives
//! - **Web**: browser timers through `gloo-timers`
//!
//! The animation engine takes time as a plain [`Duration`], so everything
//! here is expressed relative to a process-wide origin.

use instant::Instant;
use std::time::Duration;

thread_local! {
    static ORIGIN: Instant = Instant::now();
}

/// Time elapsed since the first call on this thread.
///
/// Monotonic; this is the clock handed to the animator.
pub fn now() -> Duration {
    ORIGIN.with(|origin| origin.elapsed())
}

/// Suspends the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspends the current task for `duration`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}
