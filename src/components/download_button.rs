use dioxus::prelude::*;

use crate::utils::platform;

#[component]
pub fn DownloadButton(#[props(default = String::from("Download Resume"))] text: String) -> Element {
    rsx! {
        button {
            class: "rounded-full px-6 py-3 bg-primary text-primary-foreground hover:bg-primary/90 transition-colors flex items-center justify-center gap-2",
            // Mock action until a hosted resume PDF exists.
            onclick: move |_| {
                platform::notify("This would download the resume PDF in a real deployment.");
            },
            "⭳ {text}"
        }
    }
}
