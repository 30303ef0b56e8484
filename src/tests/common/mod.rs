use std::sync::{Mutex, MutexGuard, PoisonError};

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

lazy_static::lazy_static! {
    static ref STORE_LOCK: Mutex<()> = Mutex::new(());
}

// Serializes tests that touch the shared preference slot.
pub fn store_lock() -> MutexGuard<'static, ()> {
    STORE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
