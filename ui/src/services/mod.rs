//! Infrastructure Services
//!
//! - **config**: site settings (contact form timings, navbar behaviour)
//! - **errors**: error types shared across the site

pub mod config;
pub mod errors;
