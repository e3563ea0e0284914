use dioxus::prelude::*;

use crate::components::sidebar::PalettePicker;
use crate::features::form::{FieldId, FormAction, FormState};

#[derive(Props, PartialEq, Clone)]
pub struct FieldButtonProps {
    pub field_id: FieldId,
    pub label: String,
    pub selected: bool,
    pub dispatch: EventHandler<FormAction>,
}

#[component]
pub fn FieldButton(props: FieldButtonProps) -> Element {
    let dispatch = props.dispatch;
    let field_id = props.field_id.clone();

    rsx! {
        button {
            class: if props.selected { "field-button selected" } else { "field-button" },
            onclick: move |_| dispatch.call(FormAction::SelectField(field_id.clone())),
            "{props.label}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldSidebarProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

/// Left panel: one button per field plus the "Add Field" picker
#[component]
pub fn FieldSidebar(props: FieldSidebarProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let entries: Vec<(FieldId, String, bool)> = {
        let snapshot = state.read();
        snapshot
            .fields()
            .iter()
            .map(|field| {
                (
                    field.id.clone(),
                    field.label.clone(),
                    snapshot.is_selected(&field.id),
                )
            })
            .collect()
    };

    rsx! {
        div {
            class: "form-sidebar",
            h2 { "Form Fields" }

            for (field_id, label, selected) in entries {
                FieldButton {
                    key: "{field_id}",
                    field_id: field_id.clone(),
                    label: label,
                    selected: selected,
                    dispatch: dispatch
                }
            }

            button {
                class: "add-field-btn",
                onclick: move |_| dispatch.call(FormAction::TogglePicker),
                "Add Field"
            }

            if state().is_picker_open() {
                PalettePicker { dispatch: dispatch }
            }
        }
    }
}
