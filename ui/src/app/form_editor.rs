use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::CanvasPreview;
use crate::components::forms::PropertyEditor;
use crate::components::sidebar::FieldSidebar;
use crate::features::form::{FormAction, FormState};
use crate::services::config::get_global_config;

const FORM_EDITOR_CSS: Asset = asset!("/assets/styling/form_editor.css");

#[component]
pub fn FormEditor() -> Element {
    // Consolidated state management
    let mut state = use_signal(|| FormState::new(&get_global_config()));

    use_effect(move || {
        console_info!(
            "[Form Editor] Started with {} seeded fields",
            state.peek().fields().len()
        );
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FORM_EDITOR_CSS }

        div {
            class: "form-editor",

            // Left: field list and palette
            FieldSidebar {
                state: state,
                dispatch: dispatch
            }

            // Middle: live canvas
            CanvasPreview {
                state: state
            }

            // Right: property editor for the selection
            PropertyEditor {
                state: state,
                dispatch: dispatch
            }
        }
    }
}
