use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::state::UiState;

#[function_component]
pub fn Header() -> Html {
    let dispatch = use_store::<UiState>().1;
    let on_toggle =
        dispatch.reduce_mut_callback(|s: &mut UiState| s.toggle_sidebar());

    html! {
        <header class="flex items-center gap-4 px-4 py-3 border-b
                       border-neutral-200 dark:border-neutral-700"
        >
            <button
                onclick={on_toggle}
                aria-label="Toggle sidebar"
                class="p-2 rounded-md hover:bg-neutral-100
                       dark:hover:bg-neutral-800"
            >
                {"☰"}
            </button>
            <Link<Route> to={Route::Home} classes="text-lg font-semibold">
                {"Careplan"}
            </Link<Route>>
        </header>
    }
}
