use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::configs::SITE;
use crate::routes::Route;
use crate::utils::platform;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer {
            class: "bg-secondary/80 dark:bg-background py-12",
            div {
                class: "container px-4 mx-auto",
                div {
                    class: "flex flex-col items-center",
                    button {
                        class: "mb-8 w-10 h-10 rounded-full bg-primary text-primary-foreground flex items-center justify-center hover:scale-110 transition-transform",
                        aria_label: "Scroll to top",
                        onclick: move |_| platform::scroll_to_top(),
                        "↑"
                    }

                    Link {
                        class: "text-2xl font-bold tracking-tight mb-6",
                        to: Route::Home,
                        span { class: "text-primary", {SITE.owner_first} }
                        span { class: "text-muted-foreground", {SITE.owner_last} }
                    }

                    nav {
                        class: "flex flex-wrap justify-center gap-x-6 gap-y-3 mb-8",
                        for item in SITE.nav.iter() {
                            a {
                                key: "{item.anchor}",
                                class: "text-sm font-medium text-muted-foreground hover:text-foreground transition-colors",
                                href: item.anchor,
                                {item.label}
                            }
                        }
                    }

                    div {
                        class: "flex gap-4 mb-8",
                        for link in SITE.socials.iter() {
                            a {
                                key: "{link.name}",
                                class: "flex items-center justify-center px-4 h-10 rounded-full bg-secondary hover:bg-primary hover:text-primary-foreground transition-colors",
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: link.name,
                                {link.name}
                            }
                        }
                    }

                    div {
                        class: "text-center text-sm text-muted-foreground",
                        p { "© {year} {SITE.owner_first} {SITE.owner_last}. All rights reserved." }
                        p { class: "mt-1", {SITE.role} }
                    }
                }
            }
        }
    }
}
