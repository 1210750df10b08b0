use tracing::instrument;

use super::gateway::{SharedGateway, SubmissionError};
use super::store::FormStore;
use super::types::*;
use super::validation::{validate_with_min_message, ValidationError};
use crate::services::config::ContactFormConfig;
use crate::utils::platform::delay_ms;
use crate::{console_debug, console_info, console_warn};

/// Result of one call to [`ContactFormController::submit`]
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing changed
    Ignored,
    /// Validation failed; the errors are now shown inline
    Invalid(FieldErrors),
    /// The gateway accepted the message
    Sent(NavigationRequest),
    /// The gateway failed; fields are kept for a resubmit
    Failed(SubmissionError),
}

/// First half of a submit, decided in a single state update
#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionStart {
    AlreadySubmitting,
    Invalid(FieldErrors),
    Ready(ContactSubmission),
}

impl ContactFormState {
    /// Guard, validate and, when valid, enter `Submitting`.
    pub fn begin_submission(&mut self, min_message_chars: usize) -> SubmissionStart {
        if self.is_submitting() {
            return SubmissionStart::AlreadySubmitting;
        }

        let errors = validate_with_min_message(&self.fields, min_message_chars);
        if !errors.is_empty() {
            // A new attempt replaces any earlier outcome banner
            self.reduce_in_place(ContactAction::SetStatus(SubmissionStatus::Idle));
            self.reduce_in_place(ContactAction::SetErrors(errors.clone()));
            return SubmissionStart::Invalid(errors);
        }

        self.reduce_in_place(ContactAction::SetStatus(SubmissionStatus::Submitting));
        SubmissionStart::Ready(ContactSubmission::from(&self.fields))
    }

    /// Apply the gateway result and leave `Submitting`.
    pub fn finish_submission(
        &mut self,
        submission: &ContactSubmission,
        result: Result<(), SubmissionError>,
        redirect_path: &str,
    ) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.reduce_in_place(ContactAction::SetStatus(SubmissionStatus::Succeeded));
                self.reduce_in_place(ContactAction::ResetFields);
                SubmitOutcome::Sent(NavigationRequest {
                    path: redirect_path.to_string(),
                    payload: NavigationPayload {
                        message: submission.thank_you_message(),
                    },
                })
            }
            Err(error) => {
                self.reduce_in_place(ContactAction::SetStatus(SubmissionStatus::Failed));
                SubmitOutcome::Failed(error)
            }
        }
    }
}

/// Drives the contact form: field edits, validation and the one in-flight submission.
pub struct ContactFormController<S: FormStore> {
    store: S,
    gateway: SharedGateway,
    config: ContactFormConfig,
}

impl<S: FormStore> Clone for ContactFormController<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: FormStore> ContactFormController<S> {
    pub fn new(store: S, gateway: SharedGateway, config: ContactFormConfig) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    pub fn state(&self) -> ContactFormState {
        self.store.snapshot()
    }

    /// Store a new value and drop that field's error, if any.
    pub fn update_field(&self, field: ContactField, value: String) {
        self.store.dispatch(ContactAction::SetField(field, value));
    }

    /// Check the current fields without touching state.
    pub fn validate(&self) -> FieldErrors {
        validate_with_min_message(&self.store.snapshot().fields, self.config.min_message_chars)
    }

    pub fn field_error(&self, field: ContactField) -> Option<ValidationError> {
        self.store.snapshot().errors.get(field).cloned()
    }

    #[instrument(skip_all, fields(gateway = self.gateway.name()))]
    pub async fn submit(&self) -> SubmitOutcome {
        let min_chars = self.config.min_message_chars;
        let submission = match self.store.update(|state| state.begin_submission(min_chars)) {
            SubmissionStart::AlreadySubmitting => {
                console_debug!("[ContactForm] Submit ignored - already submitting");
                return SubmitOutcome::Ignored;
            }
            SubmissionStart::Invalid(errors) => {
                console_debug!("[ContactForm] Validation failed for {} field(s)", errors.len());
                return SubmitOutcome::Invalid(errors);
            }
            SubmissionStart::Ready(submission) => submission,
        };

        console_info!("[ContactForm] Sending message via {} gateway", self.gateway.name());
        let result = self.gateway.send(&submission).await;

        if let Err(error) = &result {
            console_warn!("[ContactForm] Submission failed: {}", error);
        }

        let redirect_path = self.config.redirect_path.clone();
        self.store
            .update(|state| state.finish_submission(&submission, result, &redirect_path))
    }

    /// Submit, and after a successful send wait the redirect delay and hand the
    /// navigation request to `navigate`.
    pub async fn submit_and_redirect(&self, navigate: impl FnOnce(NavigationRequest)) -> SubmitOutcome {
        let outcome = self.submit().await;

        if let SubmitOutcome::Sent(request) = &outcome {
            delay_ms(self.config.redirect_delay_ms).await;
            console_info!("[ContactForm] Redirecting to {}", request.path);
            navigate(request.clone());
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::{LocalFormStore, SimulatedGateway, SubmissionGateway};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Counts calls and yields once so concurrent submits can interleave
    #[derive(Default)]
    struct CountingGateway {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl SubmissionGateway for CountingGateway {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            Ok(())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    struct FailingGateway;

    #[async_trait(?Send)]
    impl SubmissionGateway for FailingGateway {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), SubmissionError> {
            Err(SubmissionError::Transport {
                message: "network unreachable".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn controller_with(gateway: SharedGateway) -> ContactFormController<LocalFormStore> {
        ContactFormController::new(
            LocalFormStore::default(),
            gateway,
            ContactFormConfig::immediate(),
        )
    }

    fn fill_valid(controller: &ContactFormController<LocalFormStore>) {
        controller.update_field(ContactField::FirstName, "Jane".to_string());
        controller.update_field(ContactField::LastName, "Doe".to_string());
        controller.update_field(ContactField::Phone, "647-971-6235".to_string());
        controller.update_field(ContactField::Email, "jane@example.com".to_string());
        controller.update_field(ContactField::Message, "Hello, I would like to connect.".to_string());
    }

    #[test]
    fn test_update_field_clears_previous_error() {
        let controller = controller_with(Rc::new(SimulatedGateway::new(0)));
        controller.update_field(ContactField::Email, "bad".to_string());

        let outcome = futures::executor::block_on(controller.submit());
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(controller.field_error(ContactField::Email), Some(ValidationError::InvalidEmail));

        controller.update_field(ContactField::Email, "x".to_string());

        let state = controller.state();
        assert_eq!(state.fields.email, "x");
        assert!(!state.errors.contains(ContactField::Email));
        // Other errors survive until the next submit
        assert!(state.errors.contains(ContactField::FirstName));
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_status_and_skips_gateway() {
        let gateway = Rc::new(CountingGateway::default());
        let controller = controller_with(gateway.clone());

        let outcome = controller.submit().await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), 5),
            other => panic!("expected validation failure, got {other:?}"),
        }
        let state = controller.state();
        assert_eq!(state.submission, SubmissionStatus::Idle);
        assert_eq!(state.errors.len(), 5);
        assert_eq!(gateway.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_valid_submission_succeeds_and_clears_fields() {
        let gateway = Rc::new(CountingGateway::default());
        let controller = controller_with(gateway.clone());
        fill_valid(&controller);
        assert!(controller.validate().is_empty());

        let outcome = controller.submit().await;

        let request = match outcome {
            SubmitOutcome::Sent(request) => request,
            other => panic!("expected success, got {other:?}"),
        };
        assert_eq!(request.path, "/");
        assert!(request.payload.message.contains("Jane"));

        let state = controller.state();
        assert_eq!(state.submission, SubmissionStatus::Succeeded);
        assert_eq!(state.fields, ContactFields::default());
        assert!(state.errors.is_empty());
        assert_eq!(gateway.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_state_is_submitting_while_gateway_runs() {
        struct ObservingGateway {
            store: LocalFormStore,
            seen: Cell<Option<SubmissionStatus>>,
            errors_empty: Cell<bool>,
        }

        #[async_trait(?Send)]
        impl SubmissionGateway for ObservingGateway {
            async fn send(&self, _submission: &ContactSubmission) -> Result<(), SubmissionError> {
                let state = self.store.snapshot();
                self.seen.set(Some(state.submission));
                self.errors_empty.set(state.errors.is_empty());
                Ok(())
            }

            fn name(&self) -> &'static str {
                "observing"
            }
        }

        let store = LocalFormStore::default();
        let gateway = Rc::new(ObservingGateway {
            store: store.clone(),
            seen: Cell::new(None),
            errors_empty: Cell::new(false),
        });
        let controller =
            ContactFormController::new(store, gateway.clone(), ContactFormConfig::immediate());
        fill_valid(&controller);

        controller.submit().await;

        assert_eq!(gateway.seen.get(), Some(SubmissionStatus::Submitting));
        assert!(gateway.errors_empty.get());
    }

    #[tokio::test]
    async fn test_second_submit_while_submitting_is_ignored() {
        let gateway = Rc::new(CountingGateway::default());
        let controller = controller_with(gateway.clone());
        fill_valid(&controller);

        let navigations = RefCell::new(Vec::new());
        let (first, second) = futures::join!(
            controller.submit_and_redirect(|request| navigations.borrow_mut().push(request)),
            controller.submit_and_redirect(|request| navigations.borrow_mut().push(request)),
        );

        assert!(matches!(first, SubmitOutcome::Sent(_)));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(navigations.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_redirect_carries_thank_you_message() {
        let controller = controller_with(Rc::new(SimulatedGateway::new(0)));
        fill_valid(&controller);

        let mut navigated = None;
        controller
            .submit_and_redirect(|request| navigated = Some(request))
            .await;

        let request = navigated.expect("navigation requested");
        assert_eq!(request.path, "/");
        assert_eq!(
            request.payload.message,
            "Thank you Jane! Your message has been received. I'll get back to you soon."
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_keeps_fields_and_allows_resubmit() {
        let controller = controller_with(Rc::new(FailingGateway));
        fill_valid(&controller);

        let mut navigated = false;
        let outcome = controller.submit_and_redirect(|_| navigated = true).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(SubmissionError::Transport { .. })));
        assert!(!navigated);
        let state = controller.state();
        assert_eq!(state.submission, SubmissionStatus::Failed);
        assert!(state.show_error_banner());
        assert_eq!(state.fields.first_name, "Jane");

        // Resubmitting from Failed goes through the gateway again
        let retry = controller.submit().await;
        assert!(matches!(retry, SubmitOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_invalid_resubmit_after_failure_clears_error_banner() {
        let controller = controller_with(Rc::new(FailingGateway));
        fill_valid(&controller);
        controller.submit().await;
        assert!(controller.state().show_error_banner());

        controller.update_field(ContactField::Phone, "12345".to_string());
        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        let state = controller.state();
        assert_eq!(state.submission, SubmissionStatus::Idle);
        assert!(!state.show_error_banner());
        assert_eq!(state.error_message(ContactField::Phone).as_deref(), Some("Please enter a valid phone number"));
    }

    #[tokio::test]
    async fn test_invalid_resubmit_after_success_clears_success_banner() {
        let controller = controller_with(Rc::new(SimulatedGateway::new(0)));
        fill_valid(&controller);
        controller.submit().await;
        assert!(controller.state().show_success_banner());

        // Fields were cleared by the successful send
        let outcome = controller.submit().await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), 5),
            other => panic!("expected validation failure, got {other:?}"),
        }
        let state = controller.state();
        assert_eq!(state.submission, SubmissionStatus::Idle);
        assert!(!state.show_success_banner());
        assert_eq!(state.errors.len(), 5);
    }

    #[test]
    fn test_begin_submission_guard() {
        let mut state = ContactFormState::default();
        state.submission = SubmissionStatus::Submitting;
        assert_eq!(state.begin_submission(10), SubmissionStart::AlreadySubmitting);
    }
}
