use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{ModalContent, UiState};

/// A reusable modal component that supports backdrop clicks to close.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Modal content (passed as children)
    pub children: Html,
    /// Called when user clicks backdrop or closes the modal
    pub on_close: Callback<()>,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                       w-full p-6 max-w-md"
            >
                {props.children.clone()}
            </div>
        </div>
    }
}

/// Renders the app-level modal from `UiState`. Mounted once, near the root.
#[function_component]
pub fn ModalHost() -> Html {
    let (state, dispatch) = use_store::<UiState>();
    let on_close = dispatch.reduce_mut_callback(|s| s.close_modal());

    if !state.is_modal_open {
        return html! {};
    }

    let body = match &state.modal_content {
        Some(ModalContent::Note(note)) => html! {
            <>
                <h3 class="text-lg font-semibold mb-2">{"Doctor note"}</h3>
                <p class="text-sm text-neutral-500 mb-4">
                    {note.created.by.clone().unwrap_or_default()}
                    {" — "}{note.created.on.to_string()}
                </p>
                <p class="whitespace-pre-wrap">{&note.body}</p>
            </>
        },
        Some(ModalContent::Prescription(rx)) => html! {
            <>
                <h3 class="text-lg font-semibold mb-2">{&rx.medication}</h3>
                <p class="mb-2">{&rx.dosage}</p>
                {if let Some(instructions) = &rx.instructions {
                    html! {
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {instructions}
                        </p>
                    }
                } else {
                    html! {}
                }}
            </>
        },
        None => html! {},
    };

    let close_click = on_close.reform(|_: MouseEvent| ());
    html! {
        <Modal on_close={on_close}>
            {body}
            <div class="mt-6 text-right">
                <button
                    onclick={close_click}
                    class="px-4 py-2 rounded-md bg-neutral-200
                           dark:bg-neutral-700"
                >
                    {"Close"}
                </button>
            </div>
        </Modal>
    }
}
