use dioxus::prelude::*;

/// Tracks whether the window has scrolled past `threshold` pixels. The
/// listener stays attached for the life of the page.
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    let scrolled = use_signal(|| false);

    use_effect(move || {
        attach_listener(scrolled, threshold);
    });

    scrolled
}

#[cfg(target_arch = "wasm32")]
fn attach_listener(mut scrolled: Signal<bool>, threshold: f64) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let listener = Closure::<dyn FnMut()>::new(move || {
        let past = web_sys::window()
            .map(|window| window.scroll_y().unwrap_or(0.0) > threshold)
            .unwrap_or(false);
        if past != scrolled() {
            scrolled.set(past);
        }
    });
    if window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach window scroll listener");
    }
    listener.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn attach_listener(_scrolled: Signal<bool>, _threshold: f64) {}
