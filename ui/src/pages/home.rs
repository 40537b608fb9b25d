use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::state::UiState;

#[function_component]
pub fn Home() -> Html {
    let state = use_store::<UiState>().0;

    html! {
        <main class="max-w-3xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold mb-4">{"Careplan"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"Follow a care itinerary: appointments, doctor notes and \
                  prescriptions, updated live as clinics publish them."}
            </p>
            {if let Some(id) = state.selected_itinerary_id {
                html! {
                    <Link<Route>
                        to={Route::Itinerary { id: id.to_string() }}
                        classes="underline"
                    >
                        {"Resume your itinerary"}
                    </Link<Route>>
                }
            } else {
                html! {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Open an itinerary link from your care team to \
                          get started."}
                    </p>
                }
            }}
        </main>
    }
}
