// Core types for the contact form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::validation::ValidationError;

/// The five inputs of the contact form
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
    Email,
    Message,
}

impl ContactField {
    /// Every field, in validation order
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Form control name, also used as the element id
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name *",
            ContactField::LastName => "Last Name *",
            ContactField::Phone => "Phone Number *",
            ContactField::Email => "Email Address *",
            ContactField::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FirstName => "Enter your first name",
            ContactField::LastName => "Enter your last name",
            ContactField::Phone => "Enter your phone number",
            ContactField::Email => "Enter your email address",
            ContactField::Message => "Tell me about your project or just say hello...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw field values as typed by the visitor
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Validation failures keyed by field; empty means the form is valid
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct FieldErrors(BTreeMap<ContactField, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ContactField, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: ContactField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Inline message for a field, if it is failing
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn clear(&mut self, field: ContactField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContactField, &ValidationError)> {
        self.0.iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Validated snapshot handed to the submission gateway
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFields> for ContactSubmission {
    fn from(fields: &ContactFields) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone: fields.phone.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        }
    }
}

impl ContactSubmission {
    pub fn thank_you_message(&self) -> String {
        format!(
            "Thank you {}! Your message has been received. I'll get back to you soon.",
            self.first_name
        )
    }
}

/// Message carried along with a navigation request
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavigationPayload {
    pub message: String,
}

/// Request for the routing layer to move the visitor elsewhere
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavigationRequest {
    pub path: String,
    pub payload: NavigationPayload,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum ContactAction {
    SetField(ContactField, String),
    SetErrors(FieldErrors),
    SetStatus(SubmissionStatus),
    ResetFields,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub submission: SubmissionStatus,
}

impl ContactFormState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::SetField(field, value) => {
                self.fields.set(field, value);
                // Clear-on-edit: the field is re-checked on the next submit
                self.errors.clear(field);
            }
            ContactAction::SetErrors(errors) => {
                self.errors = errors;
            }
            ContactAction::SetStatus(status) => {
                if status == SubmissionStatus::Submitting {
                    self.errors = FieldErrors::new();
                }
                self.submission = status;
            }
            ContactAction::ResetFields => {
                self.fields = ContactFields::default();
            }
        }
    }

    /// Helper methods for common state queries
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionStatus::Submitting
    }

    pub fn show_success_banner(&self) -> bool {
        self.submission == SubmissionStatus::Succeeded
    }

    pub fn show_error_banner(&self) -> bool {
        self.submission == SubmissionStatus::Failed
    }

    pub fn error_message(&self, field: ContactField) -> Option<String> {
        self.errors.message(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut state = ContactFormState::default();
        let mut errors = FieldErrors::new();
        errors.insert(ContactField::Email, ValidationError::EmailRequired);
        errors.insert(ContactField::Phone, ValidationError::PhoneRequired);
        state.reduce_in_place(ContactAction::SetErrors(errors));

        state.reduce_in_place(ContactAction::SetField(ContactField::Email, "x".to_string()));

        assert_eq!(state.fields.email, "x");
        assert!(!state.errors.contains(ContactField::Email));
        assert!(state.errors.contains(ContactField::Phone));
    }

    #[test]
    fn test_entering_submitting_clears_errors() {
        let mut state = ContactFormState::default();
        let mut errors = FieldErrors::new();
        errors.insert(ContactField::Message, ValidationError::MessageRequired);
        state.reduce_in_place(ContactAction::SetErrors(errors));

        state.reduce_in_place(ContactAction::SetStatus(SubmissionStatus::Submitting));

        assert!(state.is_submitting());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_reset_fields_keeps_status() {
        let mut state = ContactFormState::default();
        state.reduce_in_place(ContactAction::SetField(ContactField::FirstName, "Jane".to_string()));
        state.reduce_in_place(ContactAction::SetStatus(SubmissionStatus::Succeeded));
        state.reduce_in_place(ContactAction::ResetFields);

        assert_eq!(state.fields, ContactFields::default());
        assert!(state.show_success_banner());
    }

    #[test]
    fn test_submission_serializes_with_form_names() {
        let fields = ContactFields {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "647-971-6235".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I would like to connect.".to_string(),
        };
        let json = serde_json::to_value(ContactSubmission::from(&fields)).unwrap();

        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["phone"], "647-971-6235");
    }

    #[test]
    fn test_thank_you_message_names_sender() {
        let submission = ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            message: String::new(),
        };
        assert_eq!(
            submission.thank_you_message(),
            "Thank you Jane! Your message has been received. I'll get back to you soon."
        );
    }
}
