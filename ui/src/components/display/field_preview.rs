use dioxus::prelude::*;

use crate::components::display::CameraIcon;
use crate::features::form::{FieldPreview, HeadingStyle, PreviewControl};

fn render_heading(style: HeadingStyle, text: &str) -> Element {
    match style {
        HeadingStyle::Title => rsx! { h2 { "{text}" } },
        HeadingStyle::Label => rsx! { label { "{text}" } },
        HeadingStyle::Paragraph => rsx! { p { "{text}" } },
    }
}

fn render_control(control: &PreviewControl) -> Element {
    match control {
        PreviewControl::Photo { src } => rsx! {
            div {
                class: "photo-frame",
                if let Some(src) = src {
                    img {
                        class: "photo-preview",
                        src: "{src}",
                        alt: "Uploaded"
                    }
                } else {
                    CameraIcon { size: 48 }
                }
            }
        },
        PreviewControl::Input {
            input_type,
            placeholder,
        } => rsx! {
            input {
                class: "form-input",
                r#type: "{input_type.as_str()}",
                placeholder: "{placeholder}"
            }
        },
        // Drawn together with the heading by FieldPreviewCard
        PreviewControl::Checkbox => rsx! {},
        PreviewControl::Select { options } => rsx! {
            select {
                class: "form-input",
                for choice in options.iter() {
                    option { "{choice}" }
                }
            }
        },
        PreviewControl::Radio { group, options } => rsx! {
            div {
                for choice in options.iter() {
                    label {
                        class: "radio-option",
                        input {
                            r#type: "radio",
                            name: "{group}"
                        }
                        span { "{choice}" }
                    }
                }
            }
        },
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldPreviewCardProps {
    pub preview: FieldPreview,
    pub selected: bool,
}

#[component]
pub fn FieldPreviewCard(props: FieldPreviewCardProps) -> Element {
    let preview = props.preview;
    let class = if props.selected {
        "field-preview selected"
    } else {
        "field-preview"
    };

    if preview.control == PreviewControl::Checkbox {
        return rsx! {
            div {
                class: "{class}",
                label {
                    class: "checkbox-row",
                    input { r#type: "checkbox" }
                    span { "{preview.heading}" }
                }
                p { "{preview.description}" }
            }
        };
    }

    rsx! {
        div {
            class: "{class}",
            {render_heading(preview.heading_style, &preview.heading)}
            p { "{preview.description}" }
            {render_control(&preview.control)}
        }
    }
}
