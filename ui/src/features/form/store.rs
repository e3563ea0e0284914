use crate::services::config::EditorConfig;
use crate::services::errors::{log_error, FormError, FormResult};
use crate::utils::{abbreviate_data_url, now_millis, serialize_js_safe};
use crate::{console_debug, console_info};

use super::palette::{new_field_label, seed_fields};
use super::photo::{PhotoUploadTicket, UploadOutcome};
use super::types::{Field, FieldBody, FieldId, FieldKind};

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SelectField(FieldId),
    AddField(FieldKind),
    UpdateField(Field),
    SetTitle(FieldId, String),
    SetDescription(FieldId, String),
    TogglePicker,
    ClearPhoto(FieldId),
    CompletePhotoUpload(PhotoUploadTicket, String),
    CancelPhotoUpload(PhotoUploadTicket),
}

/// Ordered field sequence plus the current selection.
///
/// The selection is kept as an id and resolved on every read, so it always
/// refers to the current version of a field in `fields`.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    fields: Vec<Field>,
    selected: Option<FieldId>,
    picker_open: bool,
    upload_generation: u64,
    pending_upload: Option<PhotoUploadTicket>,
    next_seq: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl FormState {
    /// A fresh editor holding the three seeded fields
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            fields: seed_fields(),
            selected: None,
            picker_open: config.picker_starts_open,
            upload_generation: 0,
            pending_upload: None,
            next_seq: 0,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| &field.id == id)
    }

    pub fn selected_id(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.field(id))
    }

    pub fn is_selected(&self, id: &FieldId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn pending_upload(&self) -> Option<&PhotoUploadTicket> {
        self.pending_upload.as_ref()
    }

    /// Bumped by every `begin_photo_upload`
    pub fn upload_generation(&self) -> u64 {
        self.upload_generation
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Select an existing field and close the picker
    pub fn select_field(&mut self, id: &FieldId) -> FormResult<()> {
        if self.field(id).is_none() {
            return Err(FormError::UnknownField { id: id.clone() });
        }

        if !self.is_selected(id) {
            self.invalidate_upload();
        }
        self.selected = Some(id.clone());
        self.picker_open = false;
        Ok(())
    }

    /// Append a new field of `kind`, select it and close the picker
    pub fn add_field(&mut self, kind: FieldKind) -> FieldId {
        let id = self.next_field_id();
        let field = Field::new(id.clone(), new_field_label(kind), kind);

        console_debug!(
            "[FormStore] Adding field {}",
            serialize_js_safe(&field).unwrap_or_else(|_| id.to_string())
        );

        self.fields.push(field);
        self.invalidate_upload();
        self.selected = Some(id.clone());
        self.picker_open = false;
        id
    }

    /// Replace the field whose id matches `updated.id`.
    ///
    /// Only title, description and photo change; the label and kind are fixed
    /// at creation.
    pub fn update_field(&mut self, updated: Field) -> FormResult<()> {
        let slot = self
            .fields
            .iter_mut()
            .find(|field| field.id == updated.id)
            .ok_or_else(|| FormError::UnknownField {
                id: updated.id.clone(),
            })?;

        let found = updated.kind();
        if slot.kind() != found {
            return Err(FormError::KindMismatch {
                id: updated.id,
                expected: slot.kind(),
                found,
            });
        }

        let label = std::mem::take(&mut slot.label);
        *slot = Field { label, ..updated };
        Ok(())
    }

    pub fn set_title(&mut self, id: &FieldId, title: String) -> FormResult<()> {
        let updated = self.existing(id)?.clone().with_title(title);
        self.update_field(updated)
    }

    pub fn set_description(&mut self, id: &FieldId, description: String) -> FormResult<()> {
        let updated = self.existing(id)?.clone().with_description(description);
        self.update_field(updated)
    }

    /// Reset the photo of a welcome screen
    pub fn clear_photo(&mut self, id: &FieldId) -> FormResult<()> {
        let field = self.existing(id)?;
        let kind = field.kind();
        if !kind.supports_photo() {
            return Err(FormError::PhotoNotSupported {
                id: id.clone(),
                kind,
            });
        }

        let updated = field.clone().with_photo_url(None);
        self.update_field(updated)?;
        // A read still in flight must not bring the removed photo back
        self.invalidate_upload();
        Ok(())
    }

    /// Start a photo upload for the selected welcome screen.
    ///
    /// The returned ticket supersedes every earlier one; only the latest
    /// ticket can complete.
    pub fn begin_photo_upload(&mut self, id: &FieldId) -> FormResult<PhotoUploadTicket> {
        let kind = self.existing(id)?.kind();
        if !kind.supports_photo() {
            return Err(FormError::PhotoNotSupported {
                id: id.clone(),
                kind,
            });
        }
        if !self.is_selected(id) {
            return Err(FormError::NotSelected { id: id.clone() });
        }

        self.upload_generation += 1;
        let ticket = PhotoUploadTicket {
            field_id: id.clone(),
            generation: self.upload_generation,
        };
        self.pending_upload = Some(ticket.clone());
        Ok(ticket)
    }

    /// Apply a finished photo read if its ticket is still current
    pub fn complete_photo_upload(
        &mut self,
        ticket: &PhotoUploadTicket,
        data_url: String,
    ) -> UploadOutcome {
        if self.pending_upload.as_ref() != Some(ticket) {
            console_debug!(
                "[FormStore] Dropping stale photo for {} (generation {})",
                ticket.field_id,
                ticket.generation
            );
            return UploadOutcome::Stale;
        }
        self.pending_upload = None;

        let Some(field) = self.fields.iter_mut().find(|f| f.id == ticket.field_id) else {
            return UploadOutcome::Stale;
        };
        match &mut field.body {
            FieldBody::WelcomeScreen { photo_url } => {
                console_info!(
                    "[FormStore] Photo applied to {}: {}",
                    ticket.field_id,
                    abbreviate_data_url(&data_url)
                );
                *photo_url = Some(data_url);
                UploadOutcome::Applied
            }
            _ => UploadOutcome::Stale,
        }
    }

    /// Forget the pending upload if `ticket` is still the current one
    pub fn cancel_photo_upload(&mut self, ticket: &PhotoUploadTicket) {
        if self.pending_upload.as_ref() == Some(ticket) {
            self.pending_upload = None;
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FormAction) {
        let result = match action {
            FormAction::SelectField(id) => self.select_field(&id),
            FormAction::AddField(kind) => {
                self.add_field(kind);
                Ok(())
            }
            FormAction::UpdateField(field) => self.update_field(field),
            FormAction::SetTitle(id, title) => self.set_title(&id, title),
            FormAction::SetDescription(id, description) => {
                self.set_description(&id, description)
            }
            FormAction::TogglePicker => {
                self.toggle_picker();
                Ok(())
            }
            FormAction::ClearPhoto(id) => self.clear_photo(&id),
            FormAction::CompletePhotoUpload(ticket, data_url) => {
                self.complete_photo_upload(&ticket, data_url);
                Ok(())
            }
            FormAction::CancelPhotoUpload(ticket) => {
                self.cancel_photo_upload(&ticket);
                Ok(())
            }
        };

        if let Err(error) = result {
            log_error("FormStore", &error, error.severity());
        }
    }

    fn existing(&self, id: &FieldId) -> FormResult<&Field> {
        self.field(id)
            .ok_or_else(|| FormError::UnknownField { id: id.clone() })
    }

    fn invalidate_upload(&mut self) {
        if let Some(ticket) = self.pending_upload.take() {
            console_debug!(
                "[FormStore] Cancelling photo upload for {}",
                ticket.field_id
            );
        }
    }

    fn next_field_id(&mut self) -> FieldId {
        // The sequence number keeps ids unique when two fields land in the same millisecond
        let id = FieldId::new(format!("field-{}-{}", now_millis(), self.next_seq));
        self.next_seq += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn welcome() -> FieldId {
        FieldId::new("welcome")
    }

    #[test]
    fn test_starts_with_seeded_fields_and_no_selection() {
        let state = FormState::default();
        assert_eq!(state.fields().len(), 3);
        assert!(state.selected_field().is_none());
        assert!(!state.is_picker_open());
    }

    #[test]
    fn test_add_field_grows_by_one_with_unique_ids() {
        let mut state = FormState::default();
        let mut ids: HashSet<FieldId> = state.fields().iter().map(|f| f.id.clone()).collect();

        for (round, kind) in FieldKind::ALL.iter().cycle().take(50).enumerate() {
            let before = state.fields().len();
            let id = state.add_field(*kind);
            assert_eq!(state.fields().len(), before + 1, "round {}", round);
            assert!(ids.insert(id), "duplicate id in round {}", round);
        }
    }

    #[test]
    fn test_add_field_selects_and_closes_picker() {
        let mut state = FormState::default();
        state.toggle_picker();
        assert!(state.is_picker_open());

        let id = state.add_field(FieldKind::Dropdown);
        let selected = state.selected_field().unwrap();
        assert_eq!(selected.id, id);
        assert_eq!(selected.label, "New Dropdown");
        assert_eq!(selected.kind(), FieldKind::Dropdown);
        assert!(selected.title.is_empty());
        assert!(selected.description.is_empty());
        assert!(!state.is_picker_open());
        assert_eq!(state.fields().last().unwrap().id, id);
    }

    #[test]
    fn test_add_welcome_screen_has_empty_photo_slot() {
        let mut state = FormState::default();
        let id = state.add_field(FieldKind::WelcomeScreen);
        let field = state.field(&id).unwrap();
        assert_eq!(field.body, FieldBody::WelcomeScreen { photo_url: None });
    }

    #[test]
    fn test_select_field_returns_equal_value() {
        let mut state = FormState::default();
        let target = state.fields()[1].clone();
        state.toggle_picker();

        state.select_field(&target.id).unwrap();
        assert_eq!(state.selected_field(), Some(&target));
        assert!(!state.is_picker_open());
    }

    #[test]
    fn test_select_unknown_field_keeps_selection() {
        let mut state = FormState::default();
        state.select_field(&FieldId::new("name")).unwrap();

        let err = state.select_field(&FieldId::new("ghost")).unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                id: FieldId::new("ghost")
            }
        );
        assert_eq!(state.selected_id(), Some(&FieldId::new("name")));
    }

    #[test]
    fn test_update_field_replaces_only_matching_element() {
        let mut state = FormState::default();
        state.add_field(FieldKind::TextInput);
        let before = state.fields().to_vec();

        let updated = before[1].clone().with_title("Your name").with_description("First and last");
        state.update_field(updated.clone()).unwrap();

        assert_eq!(state.fields().len(), before.len());
        for (old, new) in before.iter().zip(state.fields()) {
            assert_eq!(old.id, new.id);
            if new.id == updated.id {
                assert_eq!(new, &updated);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_field_keeps_selection_in_sync() {
        let mut state = FormState::default();
        state.select_field(&FieldId::new("email")).unwrap();

        let updated = state.selected_field().unwrap().clone().with_title("Work email");
        state.update_field(updated).unwrap();

        assert_eq!(state.selected_field().unwrap().title, "Work email");
        assert_eq!(state.field(&FieldId::new("email")).unwrap().title, "Work email");
    }

    #[test]
    fn test_update_unknown_field_changes_nothing() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let before = state.clone();

        let dangling = Field::new(FieldId::new("ghost"), "Ghost", FieldKind::Checkbox);
        let err = state.update_field(dangling).unwrap_err();

        assert!(matches!(err, FormError::UnknownField { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_cannot_change_kind_or_label() {
        let mut state = FormState::default();

        let mut relabelled = state.field(&FieldId::new("name")).unwrap().clone().with_title("Name");
        relabelled.label = "Renamed".to_string();
        state.update_field(relabelled).unwrap();
        let name = state.field(&FieldId::new("name")).unwrap();
        assert_eq!(name.label, "Enter Name");
        assert_eq!(name.title, "Name");

        let mut retyped = name.clone();
        retyped.body = FieldBody::Checkbox;
        let err = state.update_field(retyped).unwrap_err();
        assert_eq!(
            err,
            FormError::KindMismatch {
                id: FieldId::new("name"),
                expected: FieldKind::EnterName,
                found: FieldKind::Checkbox,
            }
        );
    }

    #[test]
    fn test_reducer_applies_actions() {
        let mut state = FormState::default();

        state.reduce_in_place(FormAction::TogglePicker);
        assert!(state.is_picker_open());

        state.reduce_in_place(FormAction::AddField(FieldKind::Checkbox));
        let id = state.selected_id().cloned().unwrap();
        state.reduce_in_place(FormAction::SetTitle(id.clone(), "Accept terms".to_string()));
        state.reduce_in_place(FormAction::SetDescription(id.clone(), "Required".to_string()));

        let field = state.field(&id).unwrap();
        assert_eq!(field.title, "Accept terms");
        assert_eq!(field.description, "Required");
        assert!(!state.is_picker_open());

        // Errors are logged, not propagated
        let before = state.clone();
        state.reduce_in_place(FormAction::SelectField(FieldId::new("ghost")));
        state.reduce_in_place(FormAction::ClearPhoto(id));
        assert_eq!(state, before);
    }

    #[test]
    fn test_photo_upload_applies_to_selected_welcome_screen() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();

        let ticket = state.begin_photo_upload(&welcome()).unwrap();
        assert_eq!(state.pending_upload(), Some(&ticket));

        let outcome =
            state.complete_photo_upload(&ticket, "data:image/png;base64,iVBORw0K".to_string());
        assert_eq!(outcome, UploadOutcome::Applied);
        assert_eq!(
            state.selected_field().unwrap().photo_url(),
            Some("data:image/png;base64,iVBORw0K")
        );
        assert!(state.pending_upload().is_none());
    }

    #[test]
    fn test_photo_upload_rejected_for_other_kinds_and_unselected_fields() {
        let mut state = FormState::default();
        state.select_field(&FieldId::new("name")).unwrap();

        let err = state.begin_photo_upload(&FieldId::new("name")).unwrap_err();
        assert!(matches!(err, FormError::PhotoNotSupported { .. }));

        let err = state.begin_photo_upload(&welcome()).unwrap_err();
        assert_eq!(err, FormError::NotSelected { id: welcome() });
        assert!(state.pending_upload().is_none());
    }

    #[test]
    fn test_photo_completion_after_selection_change_is_dropped() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let ticket = state.begin_photo_upload(&welcome()).unwrap();

        // User moves on before the read finishes
        state.select_field(&FieldId::new("email")).unwrap();
        let before = state.clone();

        let outcome = state.complete_photo_upload(&ticket, "data:image/png;base64,AAAA".to_string());
        assert_eq!(outcome, UploadOutcome::Stale);
        assert_eq!(state, before);
        assert_eq!(state.field(&welcome()).unwrap().photo_url(), None);
    }

    #[test]
    fn test_photo_completion_after_round_trip_selection_is_dropped() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let ticket = state.begin_photo_upload(&welcome()).unwrap();

        state.select_field(&FieldId::new("name")).unwrap();
        state.select_field(&welcome()).unwrap();

        let outcome = state.complete_photo_upload(&ticket, "data:image/png;base64,AAAA".to_string());
        assert_eq!(outcome, UploadOutcome::Stale);
        assert_eq!(state.field(&welcome()).unwrap().photo_url(), None);
    }

    #[test]
    fn test_newer_upload_supersedes_older() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let first = state.begin_photo_upload(&welcome()).unwrap();
        let second = state.begin_photo_upload(&welcome()).unwrap();
        assert!(second.generation > first.generation);

        assert_eq!(
            state.complete_photo_upload(&first, "data:image/png;base64,OLD".to_string()),
            UploadOutcome::Stale
        );
        assert_eq!(
            state.complete_photo_upload(&second, "data:image/png;base64,NEW".to_string()),
            UploadOutcome::Applied
        );
        assert_eq!(
            state.field(&welcome()).unwrap().photo_url(),
            Some("data:image/png;base64,NEW")
        );
    }

    #[test]
    fn test_cancel_only_clears_matching_ticket() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let first = state.begin_photo_upload(&welcome()).unwrap();
        let second = state.begin_photo_upload(&welcome()).unwrap();

        state.cancel_photo_upload(&first);
        assert_eq!(state.pending_upload(), Some(&second));

        state.cancel_photo_upload(&second);
        assert!(state.pending_upload().is_none());
    }

    #[test]
    fn test_clear_photo_drops_in_flight_upload() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let first = state.begin_photo_upload(&welcome()).unwrap();
        state.complete_photo_upload(&first, "data:image/png;base64,OLD".to_string());

        let second = state.begin_photo_upload(&welcome()).unwrap();
        state.clear_photo(&welcome()).unwrap();
        assert!(state.pending_upload().is_none());

        let outcome = state.complete_photo_upload(&second, "data:image/png;base64,NEW".to_string());
        assert_eq!(outcome, UploadOutcome::Stale);
        assert_eq!(state.field(&welcome()).unwrap().photo_url(), None);
    }

    #[test]
    fn test_reducer_update_field() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::SelectField(FieldId::new("name")));

        let updated = state
            .selected_field()
            .unwrap()
            .clone()
            .with_title("Full name")
            .with_description("As on your passport");
        state.reduce_in_place(FormAction::UpdateField(updated.clone()));

        assert_eq!(state.selected_field(), Some(&updated));
        assert_eq!(state.field(&welcome()).unwrap().title, "");
        assert_eq!(state.field(&FieldId::new("email")).unwrap().title, "");

        let before = state.clone();
        let dangling = Field::new(FieldId::new("ghost"), "Ghost", FieldKind::TextInput)
            .with_title("Nobody");
        state.reduce_in_place(FormAction::UpdateField(dangling));
        assert_eq!(state, before);
    }

    #[test]
    fn test_upload_generation_advances() {
        let mut state = FormState::default();
        assert_eq!(state.upload_generation(), 0);
        state.select_field(&welcome()).unwrap();
        let ticket = state.begin_photo_upload(&welcome()).unwrap();
        assert_eq!(state.upload_generation(), ticket.generation);
        assert_eq!(state.upload_generation(), 1);
    }

    #[test]
    fn test_clear_photo() {
        let mut state = FormState::default();
        state.select_field(&welcome()).unwrap();
        let ticket = state.begin_photo_upload(&welcome()).unwrap();
        state.complete_photo_upload(&ticket, "data:image/gif;base64,R0lG".to_string());

        state.clear_photo(&welcome()).unwrap();
        assert_eq!(state.field(&welcome()).unwrap().photo_url(), None);

        let err = state.clear_photo(&FieldId::new("email")).unwrap_err();
        assert!(matches!(err, FormError::PhotoNotSupported { .. }));
    }
}
