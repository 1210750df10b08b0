use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::{use_flash_notice, Route};
use crate::components::display::{CardText, FlashBanner, InfoCard, TagList};
use crate::content::PortfolioContent;

const TECH_SHOWCASE: [&str; 4] = ["React", "Node.js", "JavaScript", "MongoDB"];

const QUICK_ABOUT: [CardText; 3] = [
    CardText {
        icon: "🎓",
        title: "Education",
        text: "Software Engineering at Centennial College",
    },
    CardText {
        icon: "💻",
        title: "Expertise",
        text: "Full-Stack Web Development",
    },
    CardText {
        icon: "🚀",
        title: "Passion",
        text: "Building innovative solutions",
    },
];

#[component]
pub fn Home() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();
    let mut notice = use_flash_notice();

    let info = &content.personal_info;
    let initials = content.initials();
    let showcase: Vec<String> = TECH_SHOWCASE.iter().map(|t| t.to_string()).collect();

    rsx! {
        div {
            class: "home",

            if let Some(message) = notice() {
                div {
                    class: "container",
                    FlashBanner {
                        message,
                        on_dismiss: move |_| notice.set(None),
                    }
                }
            }

            section {
                class: "hero-section",
                div {
                    class: "hero-background",
                    div {
                        class: "hero-shapes",
                        div { class: "shape shape-1" }
                        div { class: "shape shape-2" }
                        div { class: "shape shape-3" }
                    }
                }

                div {
                    class: "hero-container container",
                    div {
                        class: "hero-content",
                        div {
                            class: "hero-text animate-fade-in",
                            div {
                                class: "hero-greeting",
                                span { class: "greeting-text", "Hello, I'm" }
                            }
                            h1 {
                                class: "hero-title",
                                span { class: "name-highlight", "{info.name}" }
                            }
                            h2 { class: "hero-subtitle", "{info.title}" }
                            div {
                                class: "hero-mission",
                                p { class: "mission-text", "{content.mission_statement}" }
                            }

                            div {
                                class: "hero-actions",
                                Link {
                                    to: Route::About {},
                                    class: "btn btn-primary hero-cta",
                                    span { "Discover My Story" }
                                    span { class: "cta-arrow", "→" }
                                }
                                Link { to: Route::Projects {}, class: "btn btn-secondary", "View My Work" }
                            }

                            div {
                                class: "hero-stats",
                                div {
                                    class: "stat-item",
                                    span { class: "stat-number", "{content.projects.len()}+" }
                                    span { class: "stat-label", "Projects" }
                                }
                                div {
                                    class: "stat-item",
                                    span { class: "stat-number", "10+" }
                                    span { class: "stat-label", "Technologies" }
                                }
                                div {
                                    class: "stat-item",
                                    span { class: "stat-number", "1+" }
                                    span { class: "stat-label", "Years Learning" }
                                }
                            }
                        }

                        div {
                            class: "hero-visual animate-slide-right",
                            div {
                                class: "hero-card",
                                div {
                                    class: "card-content",
                                    div {
                                        class: "profile-section",
                                        div {
                                            class: "profile-avatar",
                                            span { class: "avatar-text", "{initials}" }
                                        }
                                        div {
                                            class: "profile-info",
                                            h3 { "{info.name}" }
                                            p { "{info.title}" }
                                            div {
                                                class: "profile-location",
                                                span { class: "location-icon", "📍" }
                                                span { "{info.location}" }
                                            }
                                        }
                                    }
                                    TagList { tags: showcase, class: "tech-showcase".to_string() }
                                    div {
                                        class: "status-indicator",
                                        div { class: "status-dot" }
                                        span { "Available for opportunities" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "scroll-indicator",
                    div { class: "scroll-arrow", span { "↓" } }
                    span { class: "scroll-text", "Scroll to explore" }
                }
            }

            section {
                class: "home-about-section section bg-secondary",
                div {
                    class: "container",
                    div {
                        class: "home-about-content",
                        div {
                            class: "about-text",
                            h3 { class: "section-title", "Passionate About Technology" }
                            p {
                                "As a Software Engineering Technology student at Centennial College, \
                                 I'm dedicated to creating innovative web solutions that make a difference. \
                                 My journey in full-stack development combines creativity with technical expertise."
                            }
                            Link { to: Route::About {}, class: "btn btn-outline", "Learn More About Me" }
                        }
                        div {
                            class: "about-highlights",
                            for card in QUICK_ABOUT {
                                InfoCard { key: "{card.title}", card, class: "highlight-item".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
