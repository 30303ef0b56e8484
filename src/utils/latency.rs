use std::time::Duration;

/// Simulated fetch latency for the mock content layer. Resolves immediately
/// outside the browser so server rendering never blocks.
pub async fn simulate_latency(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = delay.as_millis() as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .is_err()
            {
                log::warn!("failed to schedule mock latency timer");
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = delay;
    }
}
