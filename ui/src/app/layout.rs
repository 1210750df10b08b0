use dioxus::prelude::*;

use super::routes::Route;
use crate::components::navigation::{Footer, Navbar};

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "layout",
            Navbar {}
            main {
                class: "main-content",
                role: "main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
