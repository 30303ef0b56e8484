use dioxus::prelude::*;

use crate::data::BlogPreview;
use crate::routes::Route;

#[component]
pub fn Blog() -> Element {
    let posts = BlogPreview::recent();

    rsx! {
        section {
            id: "blog",
            class: "py-24",
            div {
                class: "container px-4 mx-auto",
                div {
                    class: "max-w-6xl mx-auto",
                    div {
                        class: "mb-2 text-center",
                        span {
                            class: "inline-block px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground",
                            "Latest Articles"
                        }
                    }

                    h2 {
                        class: "text-3xl md:text-4xl font-bold tracking-tight text-center mb-12",
                        "From the Blog"
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        for post in posts {
                            BlogCard { key: "{post.id}", post: post.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BlogCard(post: BlogPreview) -> Element {
    rsx! {
        article {
            class: "group glass-morphism rounded-xl overflow-hidden",
            div {
                class: "relative overflow-hidden h-48",
                img {
                    class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-110",
                    src: "{post.image}",
                    alt: "{post.title}",
                }
                div {
                    class: "absolute top-4 left-4",
                    span {
                        class: "px-3 py-1 text-xs font-medium rounded-full bg-black/30 backdrop-blur-sm text-white",
                        "{post.category}"
                    }
                }
            }

            div {
                class: "p-6",
                div {
                    class: "flex items-center gap-4 text-xs text-muted-foreground mb-3",
                    span { "{post.date}" }
                    span { "{post.read_time} read" }
                }

                h3 {
                    class: "text-xl font-semibold mb-2 group-hover:text-primary transition-colors",
                    "{post.title}"
                }
                p { class: "text-muted-foreground mb-4 line-clamp-2", "{post.excerpt}" }

                Link {
                    class: "text-sm font-medium text-primary hover:underline",
                    to: Route::BlogPost { id: post.id },
                    "Read Article"
                }
            }
        }
    }
}
