use dioxus::prelude::*;
use std::rc::Rc;

use crate::content::PortfolioContent;
use crate::utils::platform::current_year;

#[component]
pub fn Footer() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();
    let year = current_year();
    let contact = &content.contact_info;
    let social = &contact.social_links;

    rsx! {
        footer {
            class: "footer bg-dark",
            role: "contentinfo",
            div {
                class: "footer-container container",
                div {
                    class: "footer-content",

                    div {
                        class: "footer-brand",
                        div {
                            class: "footer-logo",
                            div {
                                class: "logo-icon",
                                span { class: "logo-text", "{content.initials()}" }
                            }
                            h3 { class: "footer-title", "{content.personal_info.name}" }
                        }
                        p {
                            class: "footer-description",
                            "Full Stack Developer creating innovative web solutions with modern technologies."
                        }
                    }

                    div {
                        class: "footer-links",
                        h4 { class: "footer-heading", "Quick Links" }
                        ul {
                            class: "footer-nav",
                            for item in content.navigation_items.iter() {
                                li {
                                    key: "{item.path}",
                                    Link { to: item.path.clone(), class: "footer-link", "{item.label}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "footer-contact",
                        h4 { class: "footer-heading", "Get In Touch" }
                        div {
                            class: "footer-contact-info",
                            p {
                                class: "footer-contact-item",
                                span { class: "contact-icon", "📧" }
                                a { href: "mailto:{contact.email}", class: "footer-link", "{contact.email}" }
                            }
                            p {
                                class: "footer-contact-item",
                                span { class: "contact-icon", "📱" }
                                a { href: "tel:{contact.phone}", class: "footer-link", "{contact.phone}" }
                            }
                            p {
                                class: "footer-contact-item",
                                span { class: "contact-icon", "📍" }
                                span { "{contact.location}" }
                            }
                        }
                    }

                    div {
                        class: "footer-social",
                        h4 { class: "footer-heading", "Connect" }
                        div {
                            class: "social-links",
                            a {
                                href: "{social.linkedin}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "social-link",
                                aria_label: "LinkedIn Profile",
                                span { class: "social-icon", "💼" }
                                "LinkedIn"
                            }
                            a {
                                href: "{social.github}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "social-link",
                                aria_label: "GitHub Profile",
                                span { class: "social-icon", "💻" }
                                "GitHub"
                            }
                            a {
                                href: "{social.email}",
                                class: "social-link",
                                aria_label: "Send Email",
                                span { class: "social-icon", "✉️" }
                                "Email"
                            }
                        }
                    }
                }

                div {
                    class: "footer-bottom",
                    div {
                        class: "footer-bottom-content",
                        p {
                            class: "footer-copyright",
                            "© {year} {content.personal_info.name}. All rights reserved."
                        }
                        p {
                            class: "footer-built",
                            "Built with Rust & Dioxus • Designed with ❤️"
                        }
                    }
                }
            }
        }
    }
}
