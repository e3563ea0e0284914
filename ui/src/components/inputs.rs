//! Input components for the property editor

use dioxus::prelude::*;

pub use crate::features::form::InputType;

#[derive(Props, PartialEq, Clone)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    #[props(default = InputType::Text)]
    pub input_type: InputType,
    #[props(default = "form-input".to_string())]
    pub input_class: String,
    pub on_change: EventHandler<String>,
}

/// Labelled single-line input bound to a value
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    rsx! {
        label {
            class: "input-label",
            "{props.label}"
            input {
                class: "{props.input_class}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaFieldProps {
    pub label: String,
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// Labelled multi-line input bound to a value
#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    rsx! {
        label {
            class: "input-label",
            "{props.label}"
            textarea {
                class: "form-textarea",
                value: "{props.value}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
