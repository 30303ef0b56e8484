use dioxus::prelude::*;

use crate::configs::SITE;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "py-24 bg-secondary/50 dark:bg-secondary/10",
            div {
                class: "container px-4 mx-auto",
                div {
                    class: "max-w-4xl mx-auto",
                    div {
                        class: "mb-2 text-center",
                        span {
                            class: "inline-block px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground",
                            "About Me"
                        }
                    }

                    h2 {
                        class: "text-3xl md:text-4xl font-bold tracking-tight text-center mb-12",
                        "Who I Am"
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8 md:gap-12",
                        div {
                            class: "col-span-2",
                            p {
                                class: "text-lg text-muted-foreground mb-6",
                                "I am a skilled full-stack developer with expertise in building \
                                 modern, responsive web applications and services. With a strong \
                                 foundation in both front-end and back-end technologies, I \
                                 specialize in creating seamless user experiences and robust \
                                 server architectures."
                            }
                            p {
                                class: "text-lg text-muted-foreground mb-6",
                                "My journey in web development began with a passion for creating \
                                 intuitive interfaces that solve real-world problems. Over the \
                                 years, I've honed my skills across various technologies and \
                                 frameworks, allowing me to build complete applications from \
                                 concept to deployment."
                            }
                            p {
                                class: "text-lg text-muted-foreground",
                                "I'm constantly learning and adapting to new technologies, with a \
                                 focus on writing clean, maintainable code that delivers \
                                 exceptional performance and user experiences."
                            }
                        }

                        div {
                            class: "flex flex-col gap-6",
                            div {
                                class: "glass-morphism p-6 rounded-xl",
                                h3 {
                                    class: "text-xl font-semibold mb-4",
                                    "Personal Info"
                                }
                                ul {
                                    class: "space-y-3",
                                    li {
                                        class: "text-muted-foreground",
                                        {SITE.location}
                                    }
                                    li {
                                        class: "text-muted-foreground",
                                        span { class: "font-medium text-foreground", "Languages: " }
                                        {SITE.languages}
                                    }
                                }
                            }

                            div {
                                class: "glass-morphism p-6 rounded-xl",
                                h3 {
                                    class: "text-xl font-semibold mb-4",
                                    "Connect With Me"
                                }
                                div {
                                    class: "flex flex-wrap gap-3",
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
                            }
                        }
                    }
                }
            }
        }
    }
}
