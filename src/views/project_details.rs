use dioxus::prelude::*;

use crate::data::ProjectDetail;
use crate::routes::Route;

#[component]
pub fn ProjectDetails(id: u32) -> Element {
    let mut project = use_signal(|| None::<ProjectDetail>);
    let mut loading = use_signal(|| true);
    let mut active_image = use_signal(|| 0usize);

    use_effect(move || {
        spawn(async move {
            match ProjectDetail::resolve(id).await {
                Ok(found) => project.set(Some(found)),
                Err(e) => log::error!("failed to load project: {}", e),
            }
            loading.set(false);
        });
    });

    rsx! {
        main {
            class: "flex-grow pt-20",
            {
                let project = project.read();
                if *loading.read() {
                    rsx!(
                        div {
                            class: "container mx-auto px-4 py-16 flex items-center justify-center min-h-[50vh]",
                            div { class: "w-10 h-10 border-4 border-primary/30 border-t-primary rounded-full animate-spin" }
                        }
                    )
                } else if let Some(detail) = project.as_ref() {
                    let selected = active_image().min(detail.images.len().saturating_sub(1));
                    let cover = detail.images.get(selected).cloned().unwrap_or_default();
                    let thumbnails = detail.images.iter().cloned().enumerate().map(|(index, image)| {
                        rsx!(
                            button {
                                key: "{image}",
                                class: if index == selected {
                                    "h-20 w-28 rounded-lg overflow-hidden ring-2 ring-primary"
                                } else {
                                    "h-20 w-28 rounded-lg overflow-hidden opacity-60 hover:opacity-100 transition-opacity"
                                },
                                onclick: move |_| active_image.set(index),
                                img {
                                    class: "w-full h-full object-cover",
                                    src: "{image}",
                                    alt: "{detail.title} screenshot {index}",
                                }
                            }
                        )
                    });

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
                                h1 {
                                    class: "text-3xl md:text-4xl lg:text-5xl font-bold tracking-tight mb-4",
                                    "{detail.title}"
                                }
                                p { class: "text-lg text-muted-foreground mb-4", "{detail.description}" }
                                div {
                                    class: "flex flex-wrap items-center gap-6 text-sm text-muted-foreground mb-4",
                                    span { "{detail.date}" }
                                }
                                div {
                                    class: "flex flex-wrap gap-2",
                                    for tech in detail.technologies.iter() {
                                        span {
                                            key: "{tech}",
                                            class: "px-2 py-1 text-xs font-medium rounded-full bg-secondary text-muted-foreground",
                                            "{tech}"
                                        }
                                    }
                                }
                            }

                            div {
                                class: "mb-4",
                                img {
                                    class: "w-full h-[400px] object-cover rounded-xl",
                                    src: "{cover}",
                                    alt: "{detail.title}",
                                }
                            }
                            div {
                                class: "flex gap-3 mb-10 overflow-x-auto",
                                {thumbnails}
                            }

                            div {
                                class: "prose prose-lg dark:prose-invert max-w-none mb-10",
                                dangerous_inner_html: "{detail.content}",
                            }

                            div {
                                class: "flex items-center gap-4",
                                {detail.live.as_ref().map(|live| rsx!(
                                    a {
                                        class: "inline-flex items-center justify-center px-6 py-3 rounded-full bg-primary text-primary-foreground hover:bg-primary/90 transition-colors",
                                        href: "{live}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Visit Site"
                                    }
                                ))}
                                {detail.github.as_ref().map(|github| rsx!(
                                    a {
                                        class: "inline-flex items-center justify-center px-6 py-3 rounded-full bg-secondary text-foreground hover:bg-secondary/80 transition-colors",
                                        href: "{github}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "View Source"
                                    }
                                ))}
                            }
                        }
                    )
                } else {
                    rsx!(
                        div {
                            class: "container mx-auto px-4 py-16 text-center",
                            h2 { class: "text-2xl font-bold mb-4", "Project not found" }
                            p {
                                class: "text-muted-foreground mb-6",
                                "The project you're looking for doesn't exist or has been removed."
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
