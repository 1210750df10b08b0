use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "success-message",
            BannerKind::Error => "error-message",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BannerKind::Success => "✅",
            BannerKind::Error => "❌",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct StatusBannerProps {
    pub kind: BannerKind,
    pub message: String,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    rsx! {
        div {
            class: "status-banner {props.kind.class()}",
            role: "status",
            span { class: "status-icon", "{props.kind.icon()}" }
            "{props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FlashBannerProps {
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

/// Page-top notice for a message carried over from the previous page
#[component]
pub fn FlashBanner(props: FlashBannerProps) -> Element {
    rsx! {
        div {
            class: "flash-banner",
            role: "status",
            span { class: "status-icon", "{BannerKind::Success.icon()}" }
            p { class: "flash-text", "{props.message}" }
            button {
                class: "flash-dismiss",
                r#type: "button",
                aria_label: "Dismiss message",
                onclick: move |_| props.on_dismiss.call(()),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_kinds_use_distinct_styles() {
        assert_eq!(BannerKind::Success.class(), "success-message");
        assert_eq!(BannerKind::Error.class(), "error-message");
        assert_ne!(BannerKind::Success.icon(), BannerKind::Error.icon());
    }
}
