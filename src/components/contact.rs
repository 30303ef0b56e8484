use dioxus::prelude::*;

use crate::configs::SITE;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            id: "contact",
            class: "py-24 bg-secondary/50 dark:bg-secondary/10",
            div {
                class: "container px-4 mx-auto",
                div {
                    class: "max-w-6xl mx-auto",
                    div {
                        class: "mb-2 text-center",
                        span {
                            class: "inline-block px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground",
                            "Get In Touch"
                        }
                    }

                    h2 {
                        class: "text-3xl md:text-4xl font-bold tracking-tight text-center mb-12",
                        "Contact Me"
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8 max-w-3xl mx-auto",
                        for channel in SITE.contact.iter() {
                            a {
                                key: "{channel.title}",
                                href: channel.href,
                                div {
                                    class: "glass-morphism p-6 rounded-xl flex items-start gap-4 hover:-translate-y-1 transition-transform",
                                    div {
                                        h3 { class: "font-medium text-lg mb-1", {channel.title} }
                                        p { class: "text-sm text-muted-foreground", "Reach me here" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
