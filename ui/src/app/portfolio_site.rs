use dioxus::prelude::*;
use std::rc::Rc;

use super::flash::FlashSlot;
use super::routes::Route;
use crate::{console_error, console_info};
use crate::content::PortfolioContent;
use crate::features::contact::{SharedGateway, SimulatedGateway};
use crate::services::config::SiteConfig;
use crate::services::errors::SiteResult;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

/// Parse the embedded content and check the settings before anything renders
fn load_site() -> SiteResult<(Rc<PortfolioContent>, SiteConfig)> {
    let config = SiteConfig::new();
    config.validate()?;
    let content = PortfolioContent::builtin()?;
    Ok((Rc::new(content), config))
}

#[component]
pub fn PortfolioSite() -> Element {
    let loaded = use_hook(|| match load_site() {
        Ok(site) => Ok(site),
        Err(error) => {
            console_error!(
                "[PortfolioSite] Failed to start ({:?}): {}",
                error.severity(),
                error
            );
            Err(error.to_string())
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }

        match loaded {
            Ok((content, config)) => rsx! {
                SiteRoot { content, config }
            },
            Err(message) => rsx! {
                div {
                    class: "container section text-center site-unavailable",
                    h1 { "Site unavailable" }
                    p { "The portfolio content could not be loaded." }
                    pre { class: "site-unavailable-detail", "{message}" }
                }
            },
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct SiteRootProps {
    content: Rc<PortfolioContent>,
    config: SiteConfig,
}

/// Provides the shared collaborators to every page, then hands off to the router
#[component]
fn SiteRoot(props: SiteRootProps) -> Element {
    let content = props.content.clone();
    let config = props.config.clone();

    use_context_provider(|| content);
    let send_delay_ms = config.contact.send_delay_ms;
    use_context_provider(|| config);
    use_context_provider(|| -> SharedGateway { Rc::new(SimulatedGateway::new(send_delay_ms)) });

    let flash = use_signal(|| None);
    use_context_provider(|| FlashSlot::new(flash));

    use_hook(|| console_info!("[PortfolioSite] Content loaded, starting router"));

    rsx! {
        Router::<Route> {}
    }
}
