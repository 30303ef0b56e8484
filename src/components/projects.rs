use dioxus::prelude::*;

use crate::data::{filter_gallery, Project};
use crate::routes::Route;

#[component]
pub fn Projects() -> Element {
    let mut active_category = use_signal(|| "All".to_string());

    let gallery = Project::gallery();
    let filtered = filter_gallery(&gallery, &active_category());

    let mut filters = vec!["All".to_string()];
    filters.extend(Project::categories());

    let filter_chips = filters.into_iter().map(|category| {
        let selected = category == active_category();
        let select = category.clone();
        rsx!(
            button {
                key: "{category}",
                class: if selected {
                    "px-4 py-2 text-sm font-medium rounded-full bg-primary text-primary-foreground transition-colors"
                } else {
                    "px-4 py-2 text-sm font-medium rounded-full bg-secondary text-muted-foreground hover:text-foreground transition-colors"
                },
                onclick: move |_| active_category.set(select.clone()),
                "{category}"
            }
        )
    });

    rsx! {
        section {
            id: "projects",
            class: "py-24 bg-secondary/50 dark:bg-secondary/10",
            div {
                class: "container px-4 mx-auto",
                div {
                    class: "max-w-6xl mx-auto",
                    div {
                        class: "mb-2 text-center",
                        span {
                            class: "inline-block px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground",
                            "My Work"
                        }
                    }

                    h2 {
                        class: "text-3xl md:text-4xl font-bold tracking-tight text-center mb-12",
                        "Featured Projects"
                    }

                    div {
                        class: "flex flex-wrap justify-center gap-2 mb-12",
                        {filter_chips}
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for project in filtered {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let overflow = project.tags.len().saturating_sub(3);

    rsx! {
        div {
            class: "glass-morphism rounded-xl overflow-hidden group",
            div {
                class: "relative overflow-hidden h-48",
                img {
                    class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-110",
                    src: "{project.image}",
                    alt: "{project.title}",
                }
                div {
                    class: "absolute top-4 left-4",
                    span {
                        class: "px-3 py-1 text-xs font-medium rounded-full bg-black/30 backdrop-blur-sm text-white",
                        "{project.category}"
                    }
                }
            }

            div {
                class: "p-6",
                div {
                    class: "flex flex-wrap gap-2 mb-3",
                    for tag in project.tags.iter().take(3) {
                        span {
                            key: "{tag}",
                            class: "px-2 py-1 text-xs font-medium rounded-full bg-secondary text-muted-foreground",
                            "{tag}"
                        }
                    }
                    if overflow > 0 {
                        span {
                            class: "px-2 py-1 text-xs font-medium rounded-full bg-secondary text-muted-foreground",
                            "+{overflow}"
                        }
                    }
                }

                h3 { class: "text-xl font-semibold mb-2", "{project.title}" }
                p { class: "text-muted-foreground mb-4 line-clamp-2", "{project.description}" }

                div {
                    class: "flex items-center gap-4",
                    if project.has_details {
                        Link {
                            class: "text-sm font-medium text-primary hover:underline",
                            to: Route::ProjectDetails { id: project.id },
                            "Details"
                        }
                    }
                    {project.live.as_ref().map(|live| rsx!(
                        a {
                            class: "text-sm font-medium text-muted-foreground hover:text-foreground transition-colors",
                            href: "{live}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live"
                        }
                    ))}
                    {project.github.as_ref().map(|github| rsx!(
                        a {
                            class: "text-sm font-medium text-muted-foreground hover:text-foreground transition-colors",
                            href: "{github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Github"
                        }
                    ))}
                }
            }
        }
    }
}
