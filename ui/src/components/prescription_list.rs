use payloads::AppointmentId;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_prescriptions;
use crate::state::{ModalContent, UiState};

#[derive(Properties, PartialEq)]
pub struct PrescriptionListProps {
    /// `None` while the parent appointment is still loading.
    pub appointment_id: Option<AppointmentId>,
}

/// Live list of prescriptions for an appointment, newest first.
#[function_component]
pub fn PrescriptionList(props: &PrescriptionListProps) -> Html {
    let prescriptions = use_prescriptions(props.appointment_id);
    let dispatch = use_store::<UiState>().1;

    if prescriptions.loading {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Loading prescriptions..."}
            </p>
        };
    }
    if let Some(error) = &prescriptions.error {
        return html! {
            <p class="text-sm text-red-700 dark:text-red-400">
                {format!("Error loading prescriptions: {error}")}
            </p>
        };
    }
    if prescriptions.data.is_empty() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"No prescriptions yet"}
            </p>
        };
    }

    html! {
        <ul class="space-y-2">
            {for prescriptions.data.iter().map(|rx| {
                let open = {
                    let rx = rx.clone();
                    dispatch.reduce_mut_callback(move |s: &mut UiState| {
                        s.open_modal(ModalContent::Prescription(rx.clone()))
                    })
                };
                html! {
                    <li key={rx.id.to_string()}>
                        <button
                            onclick={open}
                            class="w-full text-left p-3 rounded-md border
                                   border-neutral-200 dark:border-neutral-700
                                   hover:bg-neutral-50
                                   dark:hover:bg-neutral-800"
                        >
                            <span class="block font-medium">
                                {&rx.medication}
                            </span>
                            <span class="block text-sm text-neutral-500">
                                {&rx.dosage}
                            </span>
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
