use std::rc::Rc;

use payloads::ItineraryId;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
mod live;
mod logs;
pub mod pages;
mod state;

pub use live::StoreHandle;
pub use state::{ModalContent, UiState};

use components::{Header, ModalHost, Sidebar};
use live::EventSourceStore;
use pages::{Home, ItineraryDetail};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/itineraries/:id")]
    Itinerary { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    // One store connection and one logging init per app instance.
    let store = use_memo((), |_| {
        logs::init_logging();
        StoreHandle::new(Rc::new(EventSourceStore::from_window_origin()))
    });

    html! {
        <ContextProvider<StoreHandle> context={(*store).clone()}>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <Header />
                    <Sidebar />
                    <Switch<Route> render={switch} />
                    <ModalHost />
                </div>
            </BrowserRouter>
        </ContextProvider<StoreHandle>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Itinerary { id } => match Uuid::parse_str(&id) {
            Ok(id) => html! { <ItineraryDetail id={ItineraryId(id)} /> },
            Err(_) => not_found(),
        },
        Route::NotFound => not_found(),
    }
}

fn not_found() -> Html {
    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-300">{"Page not found"}</p>
            </div>
        </main>
    }
}
