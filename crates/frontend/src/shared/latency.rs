//! Simulated network latency for the mocked dashboard operations.

/// Completes after `ms` milliseconds in the browser, immediately elsewhere
pub async fn simulate_latency(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}

/// Waits once, then runs `op`. No retry, no cancellation.
pub async fn deferred<R>(ms: u32, op: impl FnOnce() -> R) -> R {
    simulate_latency(ms).await;
    op()
}
