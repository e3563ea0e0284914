use dioxus::prelude::*;

use crate::components::display::FieldPreviewCard;
use crate::features::form::{preview, FieldPreview, FormState};

#[derive(Props, PartialEq, Clone)]
pub struct CanvasPreviewProps {
    pub state: Signal<FormState>,
}

/// Middle panel: live preview of every field in order
#[component]
pub fn CanvasPreview(props: CanvasPreviewProps) -> Element {
    let state = props.state;

    let previews: Vec<(FieldPreview, bool)> = {
        let snapshot = state.read();
        snapshot
            .fields()
            .iter()
            .map(|field| (preview(field), snapshot.is_selected(&field.id)))
            .collect()
    };

    rsx! {
        div {
            class: "canvas-preview",
            h2 { "Canvas Preview" }
            div {
                class: "field-preview-container",
                for (field_preview, selected) in previews {
                    FieldPreviewCard {
                        key: "{field_preview.field_id}",
                        preview: field_preview.clone(),
                        selected: selected
                    }
                }
            }
        }
    }
}
