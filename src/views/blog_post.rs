use dioxus::prelude::*;

use crate::data::BlogEntry;
use crate::routes::Route;

#[component]
pub fn BlogPost(id: u32) -> Element {
    let mut entry = use_signal(|| None::<BlogEntry>);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            match BlogEntry::resolve(id).await {
                Ok(found) => entry.set(Some(found)),
                Err(e) => log::error!("failed to load blog post: {}", e),
            }
            loading.set(false);
        });
    });

    rsx! {
        main {
            class: "flex-grow pt-20",
            {
                let entry = entry.read();
                if *loading.read() {
                    rsx!(
                        div {
                            class: "container mx-auto px-4 py-16 flex items-center justify-center min-h-[50vh]",
                            div { class: "w-10 h-10 border-4 border-primary/30 border-t-primary rounded-full animate-spin" }
                        }
                    )
                } else if let Some(post) = entry.as_ref() {
                    rsx!(
                        article {
                            class: "container mx-auto px-4 py-16 max-w-4xl",
                            div {
                                class: "mb-8",
                                Link {
                                    class: "inline-flex items-center text-muted-foreground hover:text-foreground transition-colors",
                                    to: Route::Home,
                                    "← Back to Home"
                                }
                            }

                            div {
                                class: "mb-8",
                                span {
                                    class: "inline-block px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground mb-4",
                                    "{post.category}"
                                }
                                h1 {
                                    class: "text-3xl md:text-4xl lg:text-5xl font-bold tracking-tight mb-6",
                                    "{post.title}"
                                }
                                div {
                                    class: "flex flex-wrap items-center gap-6 text-sm text-muted-foreground",
                                    span { "{post.author}" }
                                    span { "{post.date}" }
                                    span { {format!("{} min read", post.read_time())} }
                                }
                            }

                            div {
                                class: "mb-10",
                                img {
                                    class: "w-full h-[400px] object-cover rounded-xl",
                                    src: "{post.image}",
                                    alt: "{post.title}",
                                }
                            }

                            div {
                                class: "prose prose-lg dark:prose-invert max-w-none",
                                dangerous_inner_html: "{post.content}",
                            }
                        }
                    )
                } else {
                    rsx!(
                        div {
                            class: "container mx-auto px-4 py-16 text-center",
                            h2 { class: "text-2xl font-bold mb-4", "Blog post not found" }
                            p {
                                class: "text-muted-foreground mb-6",
                                "The blog post you're looking for doesn't exist or has been removed."
                            }
                            Link {
                                class: "inline-flex items-center justify-center px-6 py-3 rounded-full bg-primary text-primary-foreground hover:bg-primary/90 transition-colors",
                                to: Route::Home,
                                "Return to Home"
                            }
                        }
                    )
                }
            }
        }
    }
}
