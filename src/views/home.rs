use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{About, Blog, Contact, Hero, Projects, Skills};
use crate::utils::simulate_latency;

#[component]
pub fn Home() -> Element {
    let mut loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            simulate_latency(Duration::from_millis(1500)).await;
            loading.set(false);
        });
    });

    rsx! {
        if loading() {
            Loader {}
        } else {
            main {
                class: "flex-grow",
                Hero {}
                About {}
                Skills {}
                Projects {}
                Blog {}
                Contact {}
            }
        }
    }
}

#[component]
fn Loader() -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-background z-50",
            div {
                class: "flex flex-col items-center",
                div {
                    class: "w-12 h-12 border-4 border-primary/30 border-t-primary rounded-full animate-spin",
                }
                p { class: "mt-4 text-muted-foreground animate-pulse", "Loading..." }
            }
        }
    }
}
