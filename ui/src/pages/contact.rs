use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::display::{CardText, PageHeader};
use crate::components::forms::ContactForm;
use crate::content::PortfolioContent;

#[component]
pub fn Contact() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();
    let contact = &content.contact_info;
    let social = &contact.social_links;

    let details = [
        ("📧", "Email", contact.email.clone(), Some(format!("mailto:{}", contact.email))),
        ("📱", "Phone", contact.phone.clone(), Some(format!("tel:{}", contact.phone))),
        ("📍", "Location", contact.location.clone(), None),
        ("⏰", "Availability", contact.availability.clone(), None),
    ];

    let methods = [
        (
            CardText {
                icon: "💼",
                title: "Professional Networking",
                text: "Connect with me on LinkedIn for professional opportunities and networking.",
            },
            "LinkedIn Profile",
            social.linkedin.clone(),
            true,
        ),
        (
            CardText {
                icon: "💻",
                title: "View My Code",
                text: "Check out my projects and contribute to open-source code on GitHub.",
            },
            "GitHub Profile",
            social.github.clone(),
            true,
        ),
        (
            CardText {
                icon: "📧",
                title: "Direct Email",
                text: "For quick questions or informal chats, feel free to send me an email directly.",
            },
            "Send Email",
            social.email.clone(),
            false,
        ),
    ];

    rsx! {
        div {
            class: "contact-page",

            PageHeader {
                class: "contact-header".to_string(),
                title: "Get In Touch".to_string(),
                subtitle: "Ready to start a project or just want to chat about technology? I'd love to hear from you. Let's create something amazing together.".to_string(),
            }

            section {
                class: "contact-content section",
                div {
                    class: "container",
                    div {
                        class: "contact-wrapper",

                        div {
                            class: "contact-info-panel animate-slide-left",
                            div {
                                class: "panel-header",
                                h2 { "Let's Connect" }
                                p { "I'm available for freelance opportunities and collaborations." }
                            }
                            div {
                                class: "contact-details",
                                for (icon, title, value, href) in details {
                                    div {
                                        key: "{title}",
                                        class: "contact-item",
                                        div { class: "contact-icon", span { "{icon}" } }
                                        div {
                                            class: "contact-text",
                                            h3 { "{title}" }
                                            if let Some(href) = href {
                                                a { href: "{href}", class: "contact-link", "{value}" }
                                            } else {
                                                span { "{value}" }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                class: "social-links",
                                h3 { "Follow Me" }
                                div {
                                    class: "social-buttons",
                                    a {
                                        href: "{social.linkedin}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "social-btn linkedin",
                                        span { class: "social-icon", "💼" }
                                        "LinkedIn"
                                    }
                                    a {
                                        href: "{social.github}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "social-btn github",
                                        span { class: "social-icon", "💻" }
                                        "GitHub"
                                    }
                                }
                            }
                        }

                        div {
                            class: "contact-form-wrapper animate-slide-right",
                            div {
                                class: "form-header",
                                h2 { "Send Message" }
                                p { "Fill out the form below and I'll get back to you as soon as possible." }
                            }
                            ContactForm {}
                        }
                    }
                }
            }

            section {
                class: "alternative-contact section bg-secondary",
                div {
                    class: "container",
                    h2 { class: "section-title", "Other Ways to Reach Me" }
                    div {
                        class: "alternative-methods",
                        for (card, label, href, external) in methods {
                            div {
                                key: "{card.title}",
                                class: "method-card",
                                div { class: "method-icon", "{card.icon}" }
                                h3 { "{card.title}" }
                                p { "{card.text}" }
                                if external {
                                    a {
                                        href: "{href}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "btn btn-secondary",
                                        "{label}"
                                    }
                                } else {
                                    a { href: "{href}", class: "btn btn-secondary", "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
