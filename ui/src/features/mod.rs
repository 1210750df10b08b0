//! Page Features
//!
//! Logic behind the interactive pages, kept free of rendering code:
//!
//! - **contact**: contact form state, validation and simulated submission
//! - **projects**: technology filter and statistics for the Projects page

pub mod contact;
pub mod projects;
