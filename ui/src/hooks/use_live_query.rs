use livestore::{CollectionQuery, subscribe};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::live::StoreHandle;

/// Generic live query hook return type.
#[derive(Clone, PartialEq)]
pub struct LiveQueryReturn<T: PartialEq> {
    /// Current full result set, in the query's order.
    pub data: Vec<T>,
    /// True from the moment the query inputs change until the first
    /// snapshot (or the unkeyed short-circuit) arrives.
    pub loading: bool,
    /// Store-side failure, if any. No retries happen here.
    pub error: Option<String>,
}

impl<T: PartialEq> LiveQueryReturn<T> {
    /// The single expected document, for direct-id queries.
    pub fn single(&self) -> Option<&T> {
        self.data.first()
    }
}

/// Generic live subscription composer.
///
/// Subscribes on mount, resubscribes whenever `query` (or the injected
/// store) changes, and cancels the previous subscription before opening the
/// next one — at most one live listener exists per hook instance at any
/// time. The subscription is also cancelled on unmount.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_doctor_notes(
///     appointment_id: Option<AppointmentId>,
/// ) -> LiveQueryReturn<DoctorNote> {
///     let mut query = CollectionQuery::new(collections::DOCTOR_NOTES)
///         .order_by(OrderBy::desc("created.on"));
///     if let Some(id) = appointment_id {
///         query = query.filter("appointmentId", json!(id));
///     }
///     use_live_query(query)
/// }
/// ```
#[hook]
pub fn use_live_query<T>(query: CollectionQuery) -> LiveQueryReturn<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let store = use_context::<StoreHandle>()
        .expect("StoreHandle context not provided");
    let data = use_state(Vec::<T>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((query, store), move |(query, store)| {
            // Fresh query inputs: back to the initial loading state until
            // the first snapshot lands.
            data.set(Vec::new());
            loading.set(true);
            error.set(None);

            let guard = subscribe::<T, _>(
                store.0.clone(),
                query.clone(),
                move |update| match update {
                    Ok(docs) => {
                        data.set(docs);
                        loading.set(false);
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                },
            );

            move || guard.cancel()
        });
    }

    LiveQueryReturn {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
    }
}
