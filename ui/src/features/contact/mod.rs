//! Contact Form
//!
//! Validation and the simulated submission flow behind the Contact page:
//!
//! - **types**: field keys, form state, actions and the navigation request
//! - **validation**: per-field rules and whole-form validation
//! - **gateway**: the injected send capability and its simulated implementation
//! - **store**: where the form state lives (component signal or plain shared cell)
//! - **controller**: ties the above into `update_field` / `submit`

pub mod controller;
pub mod gateway;
pub mod store;
pub mod types;
pub mod validation;

pub use controller::{ContactFormController, SubmissionStart, SubmitOutcome};
pub use gateway::{SharedGateway, SimulatedGateway, SubmissionError, SubmissionGateway};
pub use store::{FormStore, LocalFormStore};
pub use types::*;
pub use validation::{validate, validate_with_min_message, ValidationError};
