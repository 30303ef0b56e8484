use dioxus::prelude::*;

use crate::utils::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: if theme.is_dark() {
                "p-2 rounded-full bg-gray-700 hover:bg-gray-600 transition-colors"
            } else {
                "p-2 rounded-full bg-gray-200 hover:bg-gray-300 transition-colors"
            },
            aria_label: "Toggle theme",
            onclick: move |_| theme.toggle(),
            if theme.is_dark() {
                "🌞"
            } else {
                "🌙"
            }
        }
    }
}
