use livestore::CollectionQuery;
use payloads::{Itinerary, ItineraryId, collections};
use yew::prelude::*;

use super::{LiveQueryReturn, use_live_query};

/// Live view of a single itinerary, by direct document id.
///
/// Read the result through `LiveQueryReturn::single()`: `None` with
/// `loading == false` means the document does not exist (or no id was
/// given yet).
#[hook]
pub fn use_itinerary(
    itinerary_id: Option<ItineraryId>,
) -> LiveQueryReturn<Itinerary> {
    let mut query = CollectionQuery::new(collections::ITINERARIES);
    if let Some(id) = itinerary_id {
        query = query.doc(id.to_string());
    }
    use_live_query(query)
}
