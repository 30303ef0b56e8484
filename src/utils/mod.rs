mod latency;
pub(crate) mod platform;
mod scroll;
pub(crate) mod theme;

pub use latency::simulate_latency;
pub use scroll::use_scrolled;
pub use theme::{use_theme, Theme, ThemeStore};
