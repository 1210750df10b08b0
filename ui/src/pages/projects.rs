use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::Route;
use crate::components::display::{HighlightList, TagList};
use crate::content::{PortfolioContent, Project};
use crate::features::projects::{apply_filter, filter_options, ProjectStats, TechnologyFilter};

#[derive(Props, PartialEq, Clone)]
struct ProjectCardProps {
    project: Project,
    filter: TechnologyFilter,
    index: usize,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = &props.project;
    let delay = props.index as f64 * 0.1;
    let highlighted = project
        .technologies
        .iter()
        .find(|technology| props.filter.is_selected_technology(technology))
        .cloned();

    rsx! {
        div {
            class: "project-card animate-fade-in",
            style: "animation-delay: {delay}s",

            div {
                class: "project-image",
                div {
                    class: "image-placeholder",
                    span { class: "project-icon", "💻" }
                    div {
                        class: "image-overlay",
                        div {
                            class: "overlay-content",
                            a {
                                href: "{project.demo_link}",
                                class: "overlay-btn demo-btn",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                span { class: "btn-icon", "🚀" }
                                "Live Demo"
                            }
                            a {
                                href: "{project.github_link}",
                                class: "overlay-btn github-btn",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                span { class: "btn-icon", "💻" }
                                "View Code"
                            }
                        }
                    }
                }
            }

            div {
                class: "project-content",
                div {
                    class: "project-header",
                    h3 { class: "project-title", "{project.title}" }
                }
                p { class: "project-description", "{project.description}" }

                div {
                    class: "project-highlights",
                    h4 { "Key Features:" }
                    HighlightList { items: project.highlights.clone() }
                }

                div {
                    class: "project-technologies",
                    h4 { "Technologies:" }
                    TagList { tags: project.technologies.clone(), highlighted }
                }

                div {
                    class: "project-actions",
                    a {
                        href: "{project.demo_link}",
                        class: "btn btn-primary",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Demo"
                    }
                    a {
                        href: "{project.github_link}",
                        class: "btn btn-secondary",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Source Code"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();
    let mut filter = use_signal(TechnologyFilter::default);

    let options = filter_options(&content.projects);
    let current = filter();
    let visible = apply_filter(&content.projects, &current);
    let stats = ProjectStats::from_projects(&content.projects);

    rsx! {
        div {
            class: "projects-page",

            section {
                class: "projects-header section",
                div {
                    class: "container",
                    div {
                        class: "header-content text-center",
                        h1 { class: "page-title animate-fade-in", "My Projects" }
                        p {
                            class: "page-subtitle animate-fade-in",
                            "A showcase of my recent work and technical expertise. Each project represents \
                             a unique challenge and demonstrates different aspects of full-stack development."
                        }
                    }
                }
            }

            section {
                class: "projects-filter section bg-secondary",
                div {
                    class: "container",
                    div {
                        class: "filter-content",
                        h3 { class: "filter-title", "Filter by Technology" }
                        div {
                            class: "filter-buttons",
                            for option in options {
                                button {
                                    key: "{option.label()}",
                                    class: if option == current { "filter-btn active" } else { "filter-btn" },
                                    onclick: {
                                        let option = option.clone();
                                        move |_| filter.set(option.clone())
                                    },
                                    "{option.label()}"
                                }
                            }
                        }
                        div {
                            class: "projects-count",
                            "Showing {visible.len()} of {content.projects.len()} projects"
                        }
                    }
                }
            }

            section {
                class: "projects-grid-section section",
                div {
                    class: "container",
                    if visible.is_empty() {
                        div {
                            class: "no-projects",
                            div {
                                class: "no-projects-content",
                                span { class: "no-projects-icon", "🔍" }
                                h3 { "No projects found" }
                                p { "No projects match the selected technology filter." }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| filter.set(TechnologyFilter::All),
                                    "Show All Projects"
                                }
                            }
                        }
                    } else {
                        div {
                            class: "projects-grid",
                            for (index, project) in visible.iter().enumerate() {
                                ProjectCard {
                                    key: "{project.id}",
                                    project: (*project).clone(),
                                    filter: current.clone(),
                                    index,
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "project-stats section bg-secondary",
                div {
                    class: "container",
                    h2 { class: "section-title", "Project Overview" }
                    div {
                        class: "stats-grid",
                        div {
                            class: "stat-card",
                            div { class: "stat-number", "{stats.total_projects}" }
                            div { class: "stat-label", "Total Projects" }
                        }
                        div {
                            class: "stat-card",
                            div { class: "stat-number", "{stats.technologies_used}" }
                            div { class: "stat-label", "Technologies Used" }
                        }
                        div {
                            class: "stat-card",
                            div { class: "stat-number", "{stats.key_features}" }
                            div { class: "stat-label", "Key Features" }
                        }
                        div {
                            class: "stat-card",
                            div { class: "stat-number", "{stats.completion_rate}%" }
                            div { class: "stat-label", "Completion Rate" }
                        }
                    }
                }
            }

            section {
                class: "projects-cta section",
                div {
                    class: "container",
                    div {
                        class: "cta-content text-center",
                        h2 { class: "cta-title", "Interested in My Work?" }
                        p {
                            class: "cta-description",
                            "These projects represent just a sample of what I can do. I'm always working on \
                             new ideas and would love to discuss potential collaborations or opportunities."
                        }
                        div {
                            class: "cta-actions",
                            Link { to: Route::Contact {}, class: "btn btn-primary", "Let's Work Together" }
                            Link { to: Route::About {}, class: "btn btn-secondary", "Learn More About Me" }
                        }
                    }
                }
            }
        }
    }
}
