use crate::utils::theme::Theme;

pub const STORAGE_KEY: &str = "theme";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn load_persisted() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn persist(preference: Theme) {
    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable, keeping theme in memory only");
        return;
    };
    if storage.set_item(STORAGE_KEY, preference.as_str()).is_err() {
        log::warn!("failed to persist theme preference");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(query.matches())
}

/// Toggles the `dark` class on the document root. Every dark-aware style
/// keys off this single flag.
#[cfg(target_arch = "wasm32")]
pub fn set_presentation_flag(preference: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let updated = if preference.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if updated.is_err() {
        log::warn!("failed to update document theme class");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let overflow = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", overflow).is_err() {
        log::warn!("failed to update body overflow");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(target_arch = "wasm32")]
pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.alert_with_message(message).is_err() {
        log::warn!("failed to show notification");
    }
}

// Outside a browser there is no storage and no ambient color-scheme signal:
// the preference degrades to a session-scoped slot and initialize() falls
// through to light.
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::sync::Mutex;

    lazy_static::lazy_static! {
        pub static ref MEMORY_SLOT: Mutex<Option<String>> = Mutex::new(None);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn memory_slot() -> std::sync::MutexGuard<'static, Option<String>> {
    headless::MEMORY_SLOT
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_persisted() -> Option<String> {
    memory_slot().clone()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn persist(preference: Theme) {
    *memory_slot() = Some(preference.as_str().to_string());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark() -> Option<bool> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_presentation_flag(_preference: Theme) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn lock_body_scroll(_locked: bool) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn notify(message: &str) {
    log::info!("{}", message);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn clear_persisted() {
    *memory_slot() = None;
}
