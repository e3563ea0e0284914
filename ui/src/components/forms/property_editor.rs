use dioxus::prelude::*;

use crate::components::forms::PhotoUploadForm;
use crate::components::inputs::{TextAreaField, TextField};
use crate::features::form::{Field, FormAction, FormState};

#[derive(Props, PartialEq, Clone)]
pub struct PropertyEditorProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

/// Right panel: editor for the selected field
#[component]
pub fn PropertyEditor(props: PropertyEditorProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let selected = state.read().selected_field().cloned();

    rsx! {
        div {
            class: "field-editor",
            h2 { "Field Editor" }

            if let Some(field) = selected {
                SelectedFieldEditor {
                    state: state,
                    dispatch: dispatch,
                    field: field
                }
            } else {
                p { "Select a field to edit its properties" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectedFieldEditorProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
    pub field: Field,
}

#[component]
pub fn SelectedFieldEditor(props: SelectedFieldEditorProps) -> Element {
    let dispatch = props.dispatch;
    let field = props.field;
    let title_id = field.id.clone();
    let description_id = field.id.clone();

    rsx! {
        div {
            class: "selected-field-editor",
            h3 { "{field.label}" }

            TextField {
                label: "Title:".to_string(),
                value: field.title.clone(),
                on_change: move |title: String| {
                    dispatch.call(FormAction::SetTitle(title_id.clone(), title));
                }
            }

            TextAreaField {
                label: "Description:".to_string(),
                value: field.description.clone(),
                on_change: move |description: String| {
                    dispatch.call(FormAction::SetDescription(description_id.clone(), description));
                }
            }

            if field.kind().supports_photo() {
                PhotoUploadForm {
                    state: props.state,
                    dispatch: dispatch,
                    field_id: field.id.clone()
                }
            }
        }
    }
}
