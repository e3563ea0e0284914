// Core field types - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, immutable identifier of a field
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of field kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "Welcome Screen")]
    WelcomeScreen,
    #[serde(rename = "Enter Name")]
    EnterName,
    #[serde(rename = "Enter Email")]
    EnterEmail,
    Checkbox,
    Dropdown,
    #[serde(rename = "Radio Button")]
    RadioButton,
    #[serde(rename = "Text Input")]
    TextInput,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::WelcomeScreen,
        FieldKind::EnterName,
        FieldKind::EnterEmail,
        FieldKind::Checkbox,
        FieldKind::Dropdown,
        FieldKind::RadioButton,
        FieldKind::TextInput,
    ];

    /// Human-readable name, used for labels and preview fallbacks
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::WelcomeScreen => "Welcome Screen",
            FieldKind::EnterName => "Enter Name",
            FieldKind::EnterEmail => "Enter Email",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Dropdown => "Dropdown",
            FieldKind::RadioButton => "Radio Button",
            FieldKind::TextInput => "Text Input",
        }
    }

    pub fn supports_photo(&self) -> bool {
        matches!(self, FieldKind::WelcomeScreen)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind-specific payload of a field.
///
/// The photo slot only exists on the welcome screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldBody {
    #[serde(rename = "Welcome Screen")]
    WelcomeScreen {
        #[serde(rename = "photoUrl")]
        photo_url: Option<String>,
    },
    #[serde(rename = "Enter Name")]
    EnterName,
    #[serde(rename = "Enter Email")]
    EnterEmail,
    Checkbox,
    Dropdown,
    #[serde(rename = "Radio Button")]
    RadioButton,
    #[serde(rename = "Text Input")]
    TextInput,
}

impl FieldBody {
    /// Empty body for a freshly created field of the given kind
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::WelcomeScreen => FieldBody::WelcomeScreen { photo_url: None },
            FieldKind::EnterName => FieldBody::EnterName,
            FieldKind::EnterEmail => FieldBody::EnterEmail,
            FieldKind::Checkbox => FieldBody::Checkbox,
            FieldKind::Dropdown => FieldBody::Dropdown,
            FieldKind::RadioButton => FieldBody::RadioButton,
            FieldKind::TextInput => FieldBody::TextInput,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldBody::WelcomeScreen { .. } => FieldKind::WelcomeScreen,
            FieldBody::EnterName => FieldKind::EnterName,
            FieldBody::EnterEmail => FieldKind::EnterEmail,
            FieldBody::Checkbox => FieldKind::Checkbox,
            FieldBody::Dropdown => FieldKind::Dropdown,
            FieldBody::RadioButton => FieldKind::RadioButton,
            FieldBody::TextInput => FieldKind::TextInput,
        }
    }
}

/// One editable unit of the form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub label: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub body: FieldBody,
}

impl Field {
    pub fn new(id: FieldId, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            title: String::new(),
            description: String::new(),
            body: FieldBody::empty(kind),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.body.kind()
    }

    pub fn photo_url(&self) -> Option<&str> {
        match &self.body {
            FieldBody::WelcomeScreen { photo_url } => photo_url.as_deref(),
            _ => None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the photo; ignored for kinds without a photo slot
    pub fn with_photo_url(mut self, url: Option<String>) -> Self {
        if let FieldBody::WelcomeScreen { photo_url } = &mut self.body {
            *photo_url = url;
        }
        self
    }
}

/// `type` attribute of a text-like preview input
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}
