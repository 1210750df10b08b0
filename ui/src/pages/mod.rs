//! Routed pages. Each reads the shared `Rc<PortfolioContent>` from context.

pub mod about;
pub mod contact;
pub mod education;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod services;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use home::Home;
pub use not_found::PageNotFound;
pub use projects::Projects;
pub use services::Services;
