use payloads::ItineraryId;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{NoteList, PrescriptionList};
use crate::hooks::{use_appointments, use_itinerary};
use crate::state::UiState;

#[derive(Properties, PartialEq)]
pub struct ItineraryDetailProps {
    pub id: ItineraryId,
}

/// Live view of one itinerary and everything hanging off it.
#[function_component]
pub fn ItineraryDetail(props: &ItineraryDetailProps) -> Html {
    let itinerary = use_itinerary(Some(props.id));
    let appointments = use_appointments(Some(props.id));

    // Remember which itinerary the rest of the UI (sidebar, home) should
    // point at; cleared again when this page goes away.
    {
        let dispatch = use_store::<UiState>().1;
        use_effect_with(props.id, move |id| {
            let id = *id;
            dispatch.reduce_mut(move |s| s.select_itinerary(Some(id)));
            move || dispatch.reduce_mut(|s| s.select_itinerary(None))
        });
    }

    if itinerary.loading {
        return html! {
            <main class="max-w-3xl mx-auto px-4 py-12 text-center">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading itinerary..."}
                </p>
            </main>
        };
    }
    if let Some(error) = &itinerary.error {
        return html! {
            <main class="max-w-3xl mx-auto px-4 py-12">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading itinerary: {error}")}
                </p>
            </main>
        };
    }
    let Some(itinerary) = itinerary.single() else {
        return html! {
            <main class="max-w-3xl mx-auto px-4 py-12 text-center">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Itinerary not found"}
                </p>
            </main>
        };
    };

    html! {
        <main class="max-w-3xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold">{&itinerary.title}</h1>
            <p class="text-neutral-600 dark:text-neutral-400 mb-8">
                {&itinerary.patient_name}
            </p>

            {if appointments.loading {
                html! {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading appointments..."}
                    </p>
                }
            } else if appointments.data.is_empty() {
                html! {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No appointments scheduled"}
                    </p>
                }
            } else {
                html! {
                    <div class="space-y-8">
                        {for appointments.data.iter().map(|appointment| html! {
                            <section
                                key={appointment.id.to_string()}
                                class="p-4 rounded-lg border border-neutral-200
                                       dark:border-neutral-700"
                            >
                                <h2 class="text-lg font-semibold">
                                    {&appointment.title}
                                </h2>
                                <p class="text-sm text-neutral-500 mb-4">
                                    {&appointment.clinic}
                                    {" — "}
                                    {appointment.starts_at.to_string()}
                                </p>
                                <div class="grid gap-6 sm:grid-cols-2">
                                    <div>
                                        <h3 class="font-medium mb-2">
                                            {"Doctor notes"}
                                        </h3>
                                        <NoteList
                                            appointment_id={Some(appointment.id)}
                                        />
                                    </div>
                                    <div>
                                        <h3 class="font-medium mb-2">
                                            {"Prescriptions"}
                                        </h3>
                                        <PrescriptionList
                                            appointment_id={Some(appointment.id)}
                                        />
                                    </div>
                                </div>
                            </section>
                        })}
                    </div>
                }
            }}
        </main>
    }
}
