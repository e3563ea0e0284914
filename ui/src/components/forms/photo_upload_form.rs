use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::features::form::{run_photo_upload, FieldId, FileEngineSource, FormAction, FormState};
use crate::services::config::get_global_config;
use crate::services::errors::log_error;

#[derive(Props, PartialEq, Clone)]
pub struct PhotoUploadFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
    pub field_id: FieldId,
}

/// Photo picker for the selected welcome screen
#[component]
pub fn PhotoUploadForm(props: PhotoUploadFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let clear_id = props.field_id.clone();
    let has_photo = state
        .read()
        .field(&props.field_id)
        .and_then(|field| field.photo_url())
        .is_some();
    let is_reading = state
        .read()
        .pending_upload()
        .is_some_and(|ticket| ticket.field_id == props.field_id);
    // A fresh input per generation so the same file can be picked again
    let generation = state.read().upload_generation();

    rsx! {
        div {
            class: "photo-upload",
            p { "Upload Photo:" }
            for generation in std::iter::once(generation) {
                PhotoFileInput {
                    key: "{generation}",
                    state: state,
                    dispatch: dispatch,
                    field_id: props.field_id.clone(),
                }
            }

            if is_reading {
                LoadingIndicator { message: "Reading photo...".to_string() }
            }

            if has_photo {
                button {
                    class: "clear-photo-btn",
                    onclick: move |_| dispatch.call(FormAction::ClearPhoto(clear_id.clone())),
                    "Remove photo"
                }
            }
        }
    }
}

/// File input that starts a photo read for `field_id`
#[component]
fn PhotoFileInput(props: PhotoUploadFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;
    let config = get_global_config();
    let upload_id = props.field_id.clone();

    rsx! {
        input {
            r#type: "file",
            accept: "{config.accepted_photo_types}",
            class: "file-input",
            onchange: move |evt: FormEvent| {
                // Nothing picked: leave the field alone
                let Some(files) = evt.files() else {
                    return;
                };
                if files.files().is_empty() {
                    return;
                }

                let ticket = match state.with_mut(|s| s.begin_photo_upload(&upload_id)) {
                    Ok(ticket) => ticket,
                    Err(error) => {
                        log_error("PhotoUpload", &error, error.severity());
                        return;
                    }
                };

                spawn(async move {
                    let source = FileEngineSource::new(files);
                    let action = run_photo_upload(&source, ticket, &get_global_config()).await;
                    dispatch.call(action);
                });
            }
        }
    }
}
