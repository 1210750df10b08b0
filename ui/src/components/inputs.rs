//! Input components for form entry and inline validation messages

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

/// Class for a form control, with the error modifier when it is failing
pub fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{base} error")
    } else {
        base.to_string()
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub has_error: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: control_class("form-input", props.has_error),
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedTextAreaProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    #[props(default = 6)]
    pub rows: u32,
    pub has_error: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedTextArea(props: ValidatedTextAreaProps) -> Element {
    rsx! {
        textarea {
            id: "{props.id}",
            name: "{props.id}",
            class: control_class("form-textarea", props.has_error),
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Inline message under a failing field; renders nothing when valid
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            span {
                class: "error-message",
                role: "alert",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
