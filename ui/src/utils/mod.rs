//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros (browser console, or tracing off-browser)
//! - **platform**: timers and browser window helpers

pub mod console_macros;
pub mod platform;

pub use platform::*;
