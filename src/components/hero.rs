use dioxus::prelude::*;

use crate::components::DownloadButton;
use crate::configs::SITE;

#[component]
pub fn Hero() -> Element {
    let mut revealed = use_signal(|| false);

    // Flip after mount so the entrance transition runs.
    use_effect(move || {
        revealed.set(true);
    });

    rsx! {
        section {
            id: "home",
            class: "relative min-h-screen flex items-center justify-center pt-20 overflow-hidden",
            div {
                class: "absolute inset-0 -z-10 hero-backdrop",
            }

            div {
                class: "container px-4 py-32 mx-auto",
                div {
                    class: "flex flex-col items-center justify-center text-center",
                    div {
                        class: if revealed() {
                            "max-w-4xl transition-all duration-700 opacity-100 translate-y-0"
                        } else {
                            "max-w-4xl opacity-0 translate-y-5"
                        },
                        div {
                            class: "mb-2",
                            span {
                                class: "px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground",
                                {SITE.role}
                            }
                        }

                        h1 {
                            class: "text-4xl md:text-6xl lg:text-7xl font-bold tracking-tight mb-6",
                            "Hello, I'm "
                            span {
                                class: "text-primary dark:text-primary-foreground",
                                "{SITE.owner_first} {SITE.owner_last}"
                            }
                        }

                        p {
                            class: "text-lg md:text-xl text-muted-foreground max-w-3xl mx-auto mb-10",
                            {SITE.tagline}
                        }

                        div {
                            class: "flex flex-col sm:flex-row gap-4 justify-center",
                            DownloadButton {}
                            a {
                                href: "#contact",
                                class: "rounded-full px-6 py-3 bg-secondary text-foreground hover:bg-secondary/80 transition-colors flex items-center justify-center gap-2",
                                "Contact Me"
                            }
                        }
                    }

                    div {
                        class: "absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce",
                        a {
                            href: "#about",
                            class: "flex items-center justify-center w-10 h-10 rounded-full bg-secondary text-foreground",
                            "↓"
                        }
                    }
                }
            }
        }
    }
}
