//! This crate contains the pages, components and logic of the portfolio site.

pub mod app;
pub use app::{PortfolioSite, Route};

pub mod components;
pub mod content;
pub mod features;
pub mod pages;
pub mod services;
pub mod utils;
