use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::state::UiState;

/// Slide-over navigation. Open/closed state lives in [`UiState`], so any
/// component can toggle it.
#[function_component]
pub fn Sidebar() -> Html {
    let (state, dispatch) = use_store::<UiState>();
    let on_close =
        dispatch.reduce_mut_callback(|s: &mut UiState| s.toggle_sidebar());

    if !state.is_sidebar_open {
        return html! {};
    }

    html! {
        <nav class="fixed inset-y-0 left-0 w-64 z-40 p-4 shadow-xl
                    bg-white dark:bg-neutral-900 border-r
                    border-neutral-200 dark:border-neutral-700"
        >
            <div class="flex items-center justify-between mb-6">
                <span class="font-semibold">{"Menu"}</span>
                <button onclick={on_close} aria-label="Close sidebar">
                    {"✕"}
                </button>
            </div>
            <ul class="space-y-2">
                <li>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                </li>
                {if let Some(id) = state.selected_itinerary_id {
                    html! {
                        <li>
                            <Link<Route>
                                to={Route::Itinerary { id: id.to_string() }}
                            >
                                {"Current itinerary"}
                            </Link<Route>>
                        </li>
                    }
                } else {
                    html! {}
                }}
            </ul>
        </nav>
    }
}
