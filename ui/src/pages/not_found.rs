use dioxus::prelude::*;

use crate::app::Route;
use crate::console_warn;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| console_warn!("[Router] No page at {}", path));

    rsx! {
        div {
            class: "container section text-center",
            h1 { "404 - Page Not Found" }
            p { "The page you're looking for doesn't exist." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go Home" }
        }
    }
}
