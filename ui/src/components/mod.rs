//! User Interface Components
//!
//! Reusable Dioxus components shared by the pages:
//!
//! - **forms**: the contact form and its field inputs
//! - **display**: banners, loading indicator, tag and highlight lists
//! - **inputs**: validated text inputs and textarea
//! - **navigation**: site navbar and footer

pub mod display;
pub mod forms;
pub mod inputs;
pub mod navigation;
