use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::Route;
use crate::content::PortfolioContent;
use crate::services::config::SiteConfig;
use crate::utils::platform::{is_scrolled_past, ScrollListener};

/// Class for a navigation link, `active` when it points at the current page
pub fn nav_link_class(item_path: &str, current_path: &str) -> &'static str {
    if item_path == current_path {
        "navbar-link active"
    } else {
        "navbar-link"
    }
}

#[component]
pub fn Navbar() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();
    let config = use_context::<SiteConfig>();
    let current_path = use_route::<Route>().to_string();

    let mut menu_open = use_signal(|| false);
    let scrolled = use_signal(|| false);

    // Listener lives as long as the navbar; dropping the hook detaches it
    {
        let threshold = config.navbar.scroll_threshold_px;
        let mut scrolled = scrolled;
        use_hook(move || {
            Rc::new(ScrollListener::attach(move |offset| {
                let next = is_scrolled_past(offset, threshold);
                if *scrolled.peek() != next {
                    scrolled.set(next);
                }
            }))
        });
    }

    let initials = content.initials();
    let nav_class = if scrolled() { "navbar navbar-scrolled" } else { "navbar" };
    let menu_class = if menu_open() { "navbar-menu navbar-menu-active" } else { "navbar-menu" };
    let toggle_class = if menu_open() { "navbar-toggle active" } else { "navbar-toggle" };

    rsx! {
        nav {
            class: nav_class,
            role: "navigation",
            div {
                class: "navbar-container container",

                Link {
                    to: Route::Home {},
                    class: "navbar-logo",
                    onclick: move |_| menu_open.set(false),
                    div {
                        class: "logo",
                        div {
                            class: "logo-icon",
                            span { class: "logo-text", "{initials}" }
                        }
                        span { class: "logo-name", "{content.personal_info.name}" }
                    }
                }

                div {
                    class: menu_class,
                    ul {
                        class: "navbar-nav",
                        role: "menubar",
                        for item in content.navigation_items.iter() {
                            li {
                                key: "{item.path}",
                                class: "navbar-item",
                                role: "none",
                                Link {
                                    to: item.path.clone(),
                                    class: nav_link_class(&item.path, &current_path),
                                    onclick: move |_| menu_open.set(false),
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }

                button {
                    class: toggle_class,
                    aria_label: "Toggle navigation menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "navbar-toggle-line" }
                    span { class: "navbar-toggle-line" }
                    span { class: "navbar-toggle-line" }
                }
            }

            if menu_open() {
                div {
                    class: "navbar-overlay",
                    aria_hidden: "true",
                    onclick: move |_| menu_open.set(false),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_path_is_active() {
        assert_eq!(nav_link_class("/", "/"), "navbar-link active");
        assert_eq!(nav_link_class("/about", "/about"), "navbar-link active");
        assert_eq!(nav_link_class("/", "/about"), "navbar-link");
        assert_eq!(nav_link_class("/about", "/about/team"), "navbar-link");
    }
}
