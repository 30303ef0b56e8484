use dioxus::prelude::*;

use crate::components::ThemeToggle;
use crate::configs::SITE;
use crate::routes::Route;
use crate::utils::{platform, use_scrolled};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Header() -> Element {
    let scrolled = use_scrolled(10.0);
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            class: if scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-4 px-6 md:px-10 bg-white/80 dark:bg-background/80 backdrop-blur-lg shadow-sm"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-4 px-6 md:px-10 bg-transparent"
            },
            div {
                class: "container mx-auto flex items-center justify-between",
                Link {
                    class: "text-xl font-bold tracking-tight",
                    to: Route::Home,
                    span { class: "text-primary", {SITE.owner_first} }
                    span { class: "text-muted-foreground", {SITE.owner_last} }
                }

                nav {
                    class: "hidden md:flex items-center space-x-1",
                    for item in SITE.nav.iter() {
                        a {
                            key: "{item.anchor}",
                            class: "px-3 py-2 text-sm font-medium text-muted-foreground hover:text-foreground transition-colors",
                            href: item.anchor,
                            {item.label}
                        }
                    }
                    div {
                        class: "ml-4",
                        ThemeToggle {}
                    }
                }

                div {
                    class: "flex items-center md:hidden",
                    ThemeToggle {}
                    button {
                        class: "ml-1 p-2 rounded-lg hover:bg-secondary transition-colors",
                        aria_label: "Toggle menu",
                        onclick: move |_| {
                            let open = !menu_open();
                            menu_open.set(open);
                            platform::lock_body_scroll(open);
                        },
                        if menu_open() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            div {
                class: if menu_open() {
                    "fixed inset-0 top-16 z-40 transition-all duration-500 translate-x-0 opacity-100"
                } else {
                    "fixed inset-0 top-16 z-40 transition-all duration-500 translate-x-full opacity-0 pointer-events-none"
                },
                div {
                    class: "flex flex-col h-full bg-background border-t border-border p-6",
                    nav {
                        class: "flex flex-col space-y-4",
                        for item in SITE.nav.iter() {
                            a {
                                key: "{item.anchor}",
                                class: "py-3 px-4 text-lg font-medium text-foreground rounded-md hover:bg-secondary transition-colors",
                                href: item.anchor,
                                onclick: move |_| {
                                    menu_open.set(false);
                                    platform::lock_body_scroll(false);
                                },
                                {item.label}
                            }
                        }
                    }
                }
            }
        }
    }
}
