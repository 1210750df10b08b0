use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Inline spinner followed by a short message, sized for use inside a button
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span { class: "btn-loader", aria_hidden: "true" }
        span { class: "loading-text", "{props.message}" }
    }
}
