use dioxus::prelude::*;

use crate::app::FlashSlot;
use crate::components::display::{BannerKind, LoadingIndicator, StatusBanner};
use crate::components::inputs::{FieldError, InputType, ValidatedInput, ValidatedTextArea};
use crate::features::contact::{ContactField, ContactFormController, ContactFormState, SharedGateway};
use crate::services::config::SiteConfig;

pub const SUCCESS_BANNER: &str = "Message sent successfully! Redirecting to home page...";
pub const FAILURE_BANNER: &str = "Something went wrong. Please try again or contact me directly.";

fn input_type_for(field: ContactField) -> InputType {
    match field {
        ContactField::Email => InputType::Email,
        ContactField::Phone => InputType::Tel,
        _ => InputType::Text,
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ContactFieldInputProps {
    pub field: ContactField,
    pub value: String,
    pub error: Option<String>,
    pub disabled: bool,
    pub on_change: EventHandler<(ContactField, String)>,
}

/// Label, control and inline error for one contact field
#[component]
pub fn ContactFieldInput(props: ContactFieldInputProps) -> Element {
    let field = props.field;
    let on_change = props.on_change;
    let has_error = props.error.is_some();

    rsx! {
        div {
            class: "form-group",
            label {
                r#for: "{field.name()}",
                class: "form-label",
                "{field.label()}"
            }
            if field == ContactField::Message {
                ValidatedTextArea {
                    id: field.name().to_string(),
                    value: props.value.clone(),
                    placeholder: field.placeholder().to_string(),
                    has_error,
                    disabled: props.disabled,
                    on_change: move |value: String| on_change.call((field, value)),
                }
            } else {
                ValidatedInput {
                    id: field.name().to_string(),
                    value: props.value.clone(),
                    placeholder: field.placeholder().to_string(),
                    input_type: input_type_for(field),
                    has_error,
                    disabled: props.disabled,
                    on_change: move |value: String| on_change.call((field, value)),
                }
            }
            FieldError { message: props.error.clone() }
        }
    }
}

/// Contact form bound to a fresh [`ContactFormState`] for this mount.
///
/// The submission runs in a task spawned from this component, so leaving the
/// page cancels any pending send or redirect.
#[component]
pub fn ContactForm() -> Element {
    let state = use_signal(ContactFormState::default);
    let gateway = use_context::<SharedGateway>();
    let config = use_context::<SiteConfig>();
    let flash = use_context::<FlashSlot>();
    let nav = navigator();

    let controller = use_hook(|| ContactFormController::new(state, gateway, config.contact.clone()));

    let field_controller = controller.clone();
    let on_field_change = EventHandler::new(move |(field, value): (ContactField, String)| {
        field_controller.update_field(field, value);
    });

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let controller = controller.clone();
        spawn(async move {
            controller
                .submit_and_redirect(move |request| {
                    flash.set(request.payload.message);
                    nav.push(request.path.as_str());
                })
                .await;
        });
    };

    let form = state();
    let submitting = form.is_submitting();

    let field_input = |field: ContactField| {
        rsx! {
            ContactFieldInput {
                field,
                value: form.fields.get(field).to_string(),
                error: form.error_message(field),
                disabled: submitting,
                on_change: on_field_change,
            }
        }
    };

    rsx! {
        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: onsubmit,

            div {
                class: "form-row",
                {field_input(ContactField::FirstName)}
                {field_input(ContactField::LastName)}
            }

            div {
                class: "form-row",
                {field_input(ContactField::Email)}
                {field_input(ContactField::Phone)}
            }

            {field_input(ContactField::Message)}

            button {
                r#type: "submit",
                class: if submitting { "submit-btn btn btn-primary loading" } else { "submit-btn btn btn-primary" },
                disabled: submitting,
                if submitting {
                    LoadingIndicator { message: "Sending Message...".to_string() }
                } else {
                    span { class: "btn-icon", "✉️" }
                    "Send Message"
                }
            }

            if form.show_success_banner() {
                StatusBanner { kind: BannerKind::Success, message: SUCCESS_BANNER.to_string() }
            }

            if form.show_error_banner() {
                StatusBanner { kind: BannerKind::Error, message: FAILURE_BANNER.to_string() }
            }

            p {
                class: "form-note",
                "* Required fields. I respect your privacy and will never share your information."
            }
        }
    }
}
