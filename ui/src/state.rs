use payloads::{DoctorNote, ItineraryId, Prescription};
use yewdux::prelude::*;

/// Payload rendered inside the single app-level modal.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Note(DoctorNote),
    Prescription(Prescription),
}

/// Process-wide ephemeral UI flags. Nothing here is persisted or synced to
/// the store; a reload resets everything.
///
/// All writes go through `Dispatch::reduce_mut`, so every update (including
/// the sidebar toggle) reads the state yewdux hands it at apply time, never
/// a snapshot captured when the callback was created.
#[derive(Default, Clone, PartialEq, Store)]
pub struct UiState {
    pub selected_itinerary_id: Option<ItineraryId>,
    pub is_sidebar_open: bool,
    pub is_modal_open: bool,
    pub modal_content: Option<ModalContent>,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.is_sidebar_open = !self.is_sidebar_open;
    }

    pub fn open_modal(&mut self, content: ModalContent) {
        self.is_modal_open = true;
        self.modal_content = Some(content);
    }

    pub fn close_modal(&mut self) {
        self.is_modal_open = false;
        self.modal_content = None;
    }

    pub fn select_itinerary(&mut self, id: Option<ItineraryId>) {
        self.selected_itinerary_id = id;
    }
}

#[cfg(test)]
mod tests {
    use payloads::{AppointmentId, AuditStamp, NoteId};

    use super::*;

    #[test]
    fn double_toggle_restores_sidebar() {
        let mut state = UiState::default();
        let before = state.is_sidebar_open;

        state.toggle_sidebar();
        assert_ne!(state.is_sidebar_open, before);
        state.toggle_sidebar();
        assert_eq!(state.is_sidebar_open, before);
    }

    #[test]
    fn close_modal_clears_content_whatever_it_was() {
        let mut state = UiState::default();
        let note = DoctorNote {
            id: NoteId::new(),
            appointment_id: AppointmentId::new(),
            body: "follow up in two weeks".into(),
            created: AuditStamp::now(),
        };

        state.open_modal(ModalContent::Note(note));
        assert!(state.is_modal_open);
        assert!(state.modal_content.is_some());

        state.close_modal();
        assert!(!state.is_modal_open);
        assert_eq!(state.modal_content, None);
    }

    #[test]
    fn selection_is_replaced_wholesale() {
        let mut state = UiState::default();
        let first = ItineraryId::new();
        let second = ItineraryId::new();

        state.select_itinerary(Some(first));
        assert_eq!(state.selected_itinerary_id, Some(first));

        state.select_itinerary(Some(second));
        assert_eq!(state.selected_itinerary_id, Some(second));

        state.select_itinerary(None);
        assert_eq!(state.selected_itinerary_id, None);
    }
}
