use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::Route;
use crate::components::display::{CallToAction, CardText, HighlightList, InfoCard, PageHeader, TagList};
use crate::content::{PortfolioContent, Service};

const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Discovery & Planning",
        "Understanding your requirements, target audience, and project goals. We'll define the scope, timeline, and technical approach together.",
    ),
    (
        "02",
        "Design & Prototyping",
        "Creating wireframes and prototypes to visualize the user experience. This phase ensures we're aligned on the design direction before development.",
    ),
    (
        "03",
        "Development & Testing",
        "Building your application with clean, maintainable code. Regular testing ensures quality and performance throughout development.",
    ),
    (
        "04",
        "Review & Launch",
        "Final review, feedback implementation, and deployment. I provide documentation and support for a smooth launch.",
    ),
];

const BENEFITS: [CardText; 6] = [
    CardText {
        icon: "🎓",
        title: "Academic Foundation",
        text: "Strong theoretical background in software engineering principles, ensuring robust and well-architected solutions.",
    },
    CardText {
        icon: "⚡",
        title: "Modern Technologies",
        text: "Up-to-date with the latest frameworks and tools, delivering cutting-edge solutions that stand the test of time.",
    },
    CardText {
        icon: "🔄",
        title: "Agile Approach",
        text: "Flexible development methodology with regular check-ins and iterative improvements based on your feedback.",
    },
    CardText {
        icon: "💬",
        title: "Clear Communication",
        text: "Regular updates on project progress, transparent timelines, and always available for questions and discussions.",
    },
    CardText {
        icon: "🛡️",
        title: "Quality Assurance",
        text: "Thorough testing, clean code practices, and attention to detail ensure reliable and maintainable applications.",
    },
    CardText {
        icon: "🚀",
        title: "Future-Ready",
        text: "Building scalable solutions that can grow with your business and adapt to changing requirements.",
    },
];

const PRICING_FACTORS: [CardText; 4] = [
    CardText {
        icon: "📏",
        title: "Project Scope",
        text: "Complexity and size of the application",
    },
    CardText {
        icon: "⏰",
        title: "Timeline",
        text: "Project duration and deadlines",
    },
    CardText {
        icon: "🔧",
        title: "Technologies",
        text: "Specific frameworks and tools required",
    },
    CardText {
        icon: "🎯",
        title: "Requirements",
        text: "Custom features and integrations",
    },
];

#[derive(Props, PartialEq, Clone)]
struct ServiceCardProps {
    service: Service,
    index: usize,
}

#[component]
fn ServiceCard(props: ServiceCardProps) -> Element {
    let service = &props.service;
    let delay = props.index as f64 * 0.15;

    rsx! {
        div {
            class: "service-card card animate-fade-in",
            style: "animation-delay: {delay}s",
            div {
                class: "service-header",
                div { class: "service-icon", span { "{service.icon}" } }
                h3 { class: "service-title", "{service.title}" }
            }
            div {
                class: "service-content",
                p { class: "service-description", "{service.description}" }
                div {
                    class: "service-technologies",
                    h4 { "Technologies Used:" }
                    TagList { tags: service.technologies.clone(), class: "tech-list".to_string() }
                }
                if !service.deliverables.is_empty() {
                    div {
                        class: "service-features",
                        h4 { "What You Get:" }
                        HighlightList { items: service.deliverables.clone(), class: "features-list".to_string() }
                    }
                }
            }
            div {
                class: "service-action",
                Link { to: Route::Contact {}, class: "btn btn-primary service-btn", "Discuss This Service" }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();

    rsx! {
        div {
            class: "services-page",

            PageHeader {
                class: "services-header".to_string(),
                title: "My Services".to_string(),
                subtitle: "I offer comprehensive web development services, from frontend design to full-stack solutions. Let's build something amazing together.".to_string(),
            }

            section {
                class: "services-grid-section section",
                div {
                    class: "container",
                    div {
                        class: "services-grid",
                        for (index, service) in content.services.iter().enumerate() {
                            ServiceCard { key: "{service.id}", service: service.clone(), index }
                        }
                    }
                }
            }

            section {
                class: "process-section section bg-secondary",
                div {
                    class: "container",
                    h2 { class: "section-title", "My Development Process" }
                    p {
                        class: "process-intro text-center",
                        "I follow a structured approach to ensure high-quality results and clear communication throughout the project."
                    }
                    div {
                        class: "process-steps",
                        for (number, title, text) in PROCESS_STEPS {
                            div {
                                key: "{number}",
                                class: "process-step",
                                div { class: "step-number", "{number}" }
                                div {
                                    class: "step-content",
                                    h3 { "{title}" }
                                    p { "{text}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "why-choose-section section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Why Work With Me" }
                    div {
                        class: "benefits-grid",
                        for card in BENEFITS {
                            InfoCard { key: "{card.title}", card, class: "benefit-card".to_string() }
                        }
                    }
                }
            }

            section {
                class: "pricing-section section bg-secondary",
                div {
                    class: "container",
                    h2 { class: "section-title", "Pricing Approach" }
                    div {
                        class: "pricing-content",
                        div {
                            class: "pricing-philosophy",
                            h3 { "Fair & Transparent" }
                            p {
                                "As a student developer, I offer competitive rates while maintaining \
                                 high-quality standards. Every project is unique, so I provide \
                                 customized quotes based on your specific requirements."
                            }
                        }
                        div {
                            class: "pricing-factors",
                            h3 { "Factors I Consider:" }
                            div {
                                class: "factors-grid",
                                for card in PRICING_FACTORS {
                                    InfoCard { key: "{card.title}", card, class: "factor-item".to_string() }
                                }
                            }
                        }
                    }
                }
            }

            CallToAction {
                class: "services-cta".to_string(),
                title: "Ready to Start Your Project?".to_string(),
                description: "Let's discuss your ideas and how I can help bring them to life. I'm excited to work on challenging projects and deliver excellent results.".to_string(),
                primary_label: "Get In Touch".to_string(),
                primary_to: Route::Contact {},
                secondary_label: "View My Work".to_string(),
                secondary_to: Route::Projects {},
            }
        }
    }
}
