use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::Route;
use crate::components::display::{CallToAction, CardText, InfoCard, TagList};
use crate::content::PortfolioContent;

const DRIVES: [CardText; 4] = [
    CardText {
        icon: "🚀",
        title: "Innovation",
        text: "I'm passionate about exploring new technologies and finding creative solutions to complex problems. Every project is an opportunity to learn and push boundaries.",
    },
    CardText {
        icon: "🎯",
        title: "Quality",
        text: "I believe in writing clean, maintainable code and creating user experiences that are not just functional, but delightful and accessible to everyone.",
    },
    CardText {
        icon: "🤝",
        title: "Collaboration",
        text: "I thrive in team environments and enjoy sharing knowledge with others. The best solutions come from diverse perspectives and open communication.",
    },
    CardText {
        icon: "📚",
        title: "Learning",
        text: "Technology evolves rapidly, and I'm committed to continuous learning. I stay updated with the latest trends and best practices in web development.",
    },
];

/// File name offered for the resume download, e.g. `Mandeep_Singh_Resume.pdf`
pub fn resume_file_name(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{joined}_Resume.pdf")
}

#[component]
pub fn About() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();
    let info = &content.personal_info;
    let download_name = resume_file_name(&info.name);

    rsx! {
        div {
            class: "about-page",

            section {
                class: "about-hero section",
                div {
                    class: "container",
                    div {
                        class: "about-hero-content",
                        div {
                            class: "about-image animate-slide-left",
                            div {
                                class: "profile-image",
                                div {
                                    class: "profile-placeholder",
                                    span { class: "profile-initials", "{content.initials()}" }
                                }
                                div {
                                    class: "image-decoration",
                                    div { class: "decoration-circle" }
                                    div { class: "decoration-square" }
                                }
                            }
                        }

                        div {
                            class: "about-intro animate-slide-right",
                            h1 { class: "about-title", "About {info.name}" }
                            h2 { class: "about-subtitle", "{info.title}" }

                            div {
                                class: "about-bio",
                                for (index, paragraph) in content.bio_paragraphs().into_iter().enumerate() {
                                    p { key: "{index}", class: "bio-paragraph", "{paragraph}" }
                                }
                            }

                            div {
                                class: "about-contact",
                                div {
                                    class: "contact-item",
                                    span { class: "contact-icon", "📧" }
                                    a { href: "mailto:{info.email}", class: "contact-link", "{info.email}" }
                                }
                                div {
                                    class: "contact-item",
                                    span { class: "contact-icon", "📱" }
                                    a { href: "tel:{info.phone}", class: "contact-link", "{info.phone}" }
                                }
                                div {
                                    class: "contact-item",
                                    span { class: "contact-icon", "📍" }
                                    span { "{info.location}" }
                                }
                            }

                            div {
                                class: "about-actions",
                                a {
                                    href: "{info.resume_pdf}",
                                    download: "{download_name}",
                                    class: "btn btn-primary",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    span { class: "btn-icon", "📄" }
                                    "Download Resume"
                                }
                                a {
                                    href: "{info.linkedin}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "btn btn-secondary",
                                    span { class: "btn-icon", "💼" }
                                    "LinkedIn Profile"
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "skills-section section bg-secondary",
                div {
                    class: "container",
                    h2 { class: "section-title", "Technical Skills" }
                    div {
                        class: "skills-grid",
                        for category in content.skills.categories() {
                            div {
                                key: "{category.title}",
                                class: "skill-category card",
                                div {
                                    class: "category-header",
                                    span { class: "category-icon", "{category.icon}" }
                                    h3 { "{category.title}" }
                                }
                                TagList { tags: category.skills.to_vec(), class: "skills-list".to_string() }
                            }
                        }
                    }
                }
            }

            section {
                class: "highlights-section section",
                div {
                    class: "container",
                    h2 { class: "section-title", "What Drives Me" }
                    div {
                        class: "highlights-grid",
                        for card in DRIVES {
                            InfoCard { key: "{card.title}", card, class: "highlight-card animate-fade-in".to_string() }
                        }
                    }
                }
            }

            CallToAction {
                class: "about-cta".to_string(),
                title: "Ready to Work Together?".to_string(),
                description: "I'm always interested in discussing new opportunities and exciting projects. Let's connect and see how we can create something amazing together.".to_string(),
                primary_label: "Get In Touch".to_string(),
                primary_to: Route::Contact {},
                secondary_label: "View My Projects".to_string(),
                secondary_to: Route::Projects {},
            }
        }
    }
}
