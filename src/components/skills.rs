use dioxus::prelude::*;

use crate::data::Skill;

#[component]
pub fn Skills() -> Element {
    let grouped = Skill::grouped();

    rsx! {
        section {
            id: "skills",
            class: "py-24",
            div {
                class: "container px-4 mx-auto",
                div {
                    class: "max-w-4xl mx-auto",
                    div {
                        class: "mb-2 text-center",
                        span {
                            class: "inline-block px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary dark:bg-primary/20 dark:text-primary-foreground",
                            "My Expertise"
                        }
                    }

                    h2 {
                        class: "text-3xl md:text-4xl font-bold tracking-tight text-center mb-12",
                        "Skills & Technologies"
                    }

                    div {
                        class: "space-y-10",
                        for (category, members) in grouped {
                            div {
                                key: "{category:?}",
                                h3 {
                                    class: "text-xl font-semibold mb-6",
                                    {category.label()}
                                }
                                div {
                                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                                    for skill in members {
                                        SkillBar { key: "{skill.name}", skill: skill.clone() }
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

#[component]
fn SkillBar(skill: Skill) -> Element {
    rsx! {
        div {
            class: "glass-morphism p-5 rounded-xl",
            div {
                class: "flex justify-between mb-2",
                span { class: "font-medium", "{skill.name}" }
                span { class: "text-sm text-muted-foreground", "{skill.level}%" }
            }
            div {
                class: "w-full h-2 bg-secondary rounded-full overflow-hidden",
                div {
                    class: "h-full bg-primary transition-all duration-1000",
                    style: "width: {skill.level}%",
                }
            }
        }
    }
}
