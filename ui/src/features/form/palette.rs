use super::types::{Field, FieldId, FieldKind};

/// One entry of the "Add Field" picker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub key: &'static str,
    pub kind: FieldKind,
}

impl PaletteEntry {
    pub fn button_label(&self) -> String {
        format!("Add {}", self.kind.display_name())
    }
}

const PALETTE: [PaletteEntry; 4] = [
    PaletteEntry {
        key: "checkbox",
        kind: FieldKind::Checkbox,
    },
    PaletteEntry {
        key: "dropdown",
        kind: FieldKind::Dropdown,
    },
    PaletteEntry {
        key: "radio",
        kind: FieldKind::RadioButton,
    },
    PaletteEntry {
        key: "text",
        kind: FieldKind::TextInput,
    },
];

/// Field kinds a user can add after startup
pub fn palette() -> &'static [PaletteEntry] {
    &PALETTE
}

/// The three fields every form starts with
pub fn seed_fields() -> Vec<Field> {
    vec![
        Field::new(
            FieldId::new("welcome"),
            FieldKind::WelcomeScreen.display_name(),
            FieldKind::WelcomeScreen,
        ),
        Field::new(
            FieldId::new("name"),
            FieldKind::EnterName.display_name(),
            FieldKind::EnterName,
        ),
        Field::new(
            FieldId::new("email"),
            FieldKind::EnterEmail.display_name(),
            FieldKind::EnterEmail,
        ),
    ]
}

/// Sidebar label of a field created from the palette
pub fn new_field_label(kind: FieldKind) -> String {
    format!("New {}", kind.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_entries() {
        let labels: Vec<String> = palette().iter().map(PaletteEntry::button_label).collect();
        assert_eq!(
            labels,
            vec![
                "Add Checkbox",
                "Add Dropdown",
                "Add Radio Button",
                "Add Text Input"
            ]
        );
    }

    #[test]
    fn test_seed_fields() {
        let seeded = seed_fields();
        let ids: Vec<&str> = seeded.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["welcome", "name", "email"]);
        assert_eq!(seeded[0].kind(), FieldKind::WelcomeScreen);
        assert_eq!(seeded[0].photo_url(), None);
        assert!(seeded.iter().all(|f| f.title.is_empty() && f.description.is_empty()));
    }

    #[test]
    fn test_new_field_label() {
        assert_eq!(new_field_label(FieldKind::Checkbox), "New Checkbox");
        assert_eq!(new_field_label(FieldKind::RadioButton), "New Radio Button");
    }
}
