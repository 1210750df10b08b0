use dioxus::prelude::*;

use super::layout::SiteLayout;
use crate::pages::{About, Contact, Education, Home, PageNotFound, Projects, Services};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/education")]
        Education {},
        #[route("/services")]
        Services {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}
