//! Site shell: routing, layout and the root component with its contexts.

pub mod flash;
pub mod layout;
pub mod portfolio_site;
pub mod routes;

pub use flash::{use_flash_notice, FlashSlot};
pub use layout::SiteLayout;
pub use portfolio_site::PortfolioSite;
pub use routes::Route;
