use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TagListProps {
    pub tags: Vec<String>,
    #[props(default = "tech-tags".to_string())]
    pub class: String,
    /// Tag rendered with the `highlighted` modifier
    #[props(default)]
    pub highlighted: Option<String>,
}

#[component]
pub fn TagList(props: TagListProps) -> Element {
    rsx! {
        div {
            class: "{props.class}",
            for tag in props.tags.iter() {
                span {
                    key: "{tag}",
                    class: if props.highlighted.as_deref() == Some(tag.as_str()) { "tech-tag highlighted" } else { "tech-tag" },
                    "{tag}"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct HighlightListProps {
    pub items: Vec<String>,
    #[props(default = "highlights-list".to_string())]
    pub class: String,
}

/// Bulleted list of short achievement or feature lines
#[component]
pub fn HighlightList(props: HighlightListProps) -> Element {
    rsx! {
        ul {
            class: "{props.class}",
            for (index, item) in props.items.iter().enumerate() {
                li { key: "{index}", class: "highlight-item", "{item}" }
            }
        }
    }
}
