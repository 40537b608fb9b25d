use payloads::AppointmentId;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_doctor_notes;
use crate::state::{ModalContent, UiState};

#[derive(Properties, PartialEq)]
pub struct NoteListProps {
    /// `None` while the parent appointment is still loading.
    pub appointment_id: Option<AppointmentId>,
}

/// Live list of doctor notes for an appointment, newest first. Clicking a
/// note opens it in the app modal.
#[function_component]
pub fn NoteList(props: &NoteListProps) -> Html {
    let notes = use_doctor_notes(props.appointment_id);
    let dispatch = use_store::<UiState>().1;

    if notes.loading {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Loading notes..."}
            </p>
        };
    }
    if let Some(error) = &notes.error {
        return html! {
            <p class="text-sm text-red-700 dark:text-red-400">
                {format!("Error loading notes: {error}")}
            </p>
        };
    }
    if notes.data.is_empty() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"No notes yet"}
            </p>
        };
    }

    html! {
        <ul class="space-y-2">
            {for notes.data.iter().map(|note| {
                let open = {
                    let note = note.clone();
                    dispatch.reduce_mut_callback(move |s: &mut UiState| {
                        s.open_modal(ModalContent::Note(note.clone()))
                    })
                };
                html! {
                    <li key={note.id.to_string()}>
                        <button
                            onclick={open}
                            class="w-full text-left p-3 rounded-md border
                                   border-neutral-200 dark:border-neutral-700
                                   hover:bg-neutral-50
                                   dark:hover:bg-neutral-800"
                        >
                            <span class="block text-sm text-neutral-500">
                                {note.created.on.to_string()}
                            </span>
                            <span class="block truncate">{&note.body}</span>
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
