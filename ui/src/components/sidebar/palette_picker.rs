use dioxus::prelude::*;

use crate::features::form::{palette, FormAction};

#[derive(Props, PartialEq, Clone)]
pub struct PalettePickerProps {
    pub dispatch: EventHandler<FormAction>,
}

/// Buttons for each field kind the user can add
#[component]
pub fn PalettePicker(props: PalettePickerProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "palette-picker",
            for entry in palette().iter().copied() {
                button {
                    key: "{entry.key}",
                    class: "additional-field-button",
                    onclick: move |_| dispatch.call(FormAction::AddField(entry.kind)),
                    "{entry.button_label()}"
                }
            }
        }
    }
}
