use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub class: String,
    pub title: String,
    pub subtitle: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        section {
            class: "{props.class} section",
            div {
                class: "container",
                div {
                    class: "header-content text-center",
                    h1 { class: "page-title animate-fade-in", "{props.title}" }
                    p { class: "page-subtitle animate-fade-in", "{props.subtitle}" }
                }
            }
        }
    }
}

/// Static icon/title/text triple shown in card grids
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct CardText {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Props, PartialEq, Clone)]
pub struct InfoCardProps {
    pub card: CardText,
    #[props(default = "highlight-card".to_string())]
    pub class: String,
}

#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    let card = props.card;
    rsx! {
        div {
            class: "{props.class}",
            div { class: "card-icon", "{card.icon}" }
            h3 { "{card.title}" }
            p { "{card.text}" }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CallToActionProps {
    pub class: String,
    pub title: String,
    pub description: String,
    pub primary_label: String,
    pub primary_to: Route,
    pub secondary_label: String,
    pub secondary_to: Route,
}

/// Closing section of a page with two buttons linking elsewhere on the site
#[component]
pub fn CallToAction(props: CallToActionProps) -> Element {
    rsx! {
        section {
            class: "{props.class} section bg-primary",
            div {
                class: "container",
                div {
                    class: "cta-content text-center",
                    h2 { class: "cta-title", "{props.title}" }
                    p { class: "cta-description", "{props.description}" }
                    div {
                        class: "cta-actions",
                        Link { to: props.primary_to.clone(), class: "btn btn-outline btn-light", "{props.primary_label}" }
                        Link { to: props.secondary_to.clone(), class: "btn btn-secondary", "{props.secondary_label}" }
                    }
                }
            }
        }
    }
}
