use super::types::{Field, FieldBody, FieldId, InputType};

/// How the preview heading is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Large screen title
    Title,
    /// Label above (or beside) an input
    Label,
    /// Plain paragraph above a group of choices
    Paragraph,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewControl {
    /// Uploaded image, or a camera placeholder when `src` is `None`
    Photo { src: Option<String> },
    Input {
        input_type: InputType,
        placeholder: &'static str,
    },
    Checkbox,
    Select { options: Vec<String> },
    Radio { group: String, options: Vec<String> },
}

/// Everything the canvas needs to draw one field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPreview {
    pub field_id: FieldId,
    pub heading: String,
    pub heading_style: HeadingStyle,
    pub description: String,
    pub control: PreviewControl,
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn numbered_options(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("Option {}", n)).collect()
}

/// Map a field to its canvas preview, falling back to generic text for an
/// empty title or description.
pub fn preview(field: &Field) -> FieldPreview {
    let fallback_heading = field.kind().display_name();

    let (heading, heading_style, description, control) = match &field.body {
        FieldBody::WelcomeScreen { photo_url } => (
            or_fallback(&field.title, "Welcome"),
            HeadingStyle::Title,
            or_fallback(&field.description, "Welcome description"),
            PreviewControl::Photo {
                src: photo_url.clone().filter(|url| !url.is_empty()),
            },
        ),
        FieldBody::EnterName => (
            or_fallback(&field.title, fallback_heading),
            HeadingStyle::Label,
            field.description.clone(),
            PreviewControl::Input {
                input_type: InputType::Text,
                placeholder: "Enter your name",
            },
        ),
        FieldBody::EnterEmail => (
            or_fallback(&field.title, fallback_heading),
            HeadingStyle::Label,
            field.description.clone(),
            PreviewControl::Input {
                input_type: InputType::Email,
                placeholder: "Enter your email",
            },
        ),
        FieldBody::Checkbox => (
            or_fallback(&field.title, fallback_heading),
            HeadingStyle::Label,
            field.description.clone(),
            PreviewControl::Checkbox,
        ),
        FieldBody::Dropdown => (
            or_fallback(&field.title, fallback_heading),
            HeadingStyle::Label,
            field.description.clone(),
            PreviewControl::Select {
                options: numbered_options(3),
            },
        ),
        FieldBody::RadioButton => (
            or_fallback(&field.title, fallback_heading),
            HeadingStyle::Paragraph,
            field.description.clone(),
            PreviewControl::Radio {
                group: format!("radio-{}", field.id),
                options: numbered_options(2),
            },
        ),
        FieldBody::TextInput => (
            or_fallback(&field.title, fallback_heading),
            HeadingStyle::Label,
            field.description.clone(),
            PreviewControl::Input {
                input_type: InputType::Text,
                placeholder: "Enter text",
            },
        ),
    };

    FieldPreview {
        field_id: field.id.clone(),
        heading,
        heading_style,
        description,
        control,
    }
}
