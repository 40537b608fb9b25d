use livestore::{CollectionQuery, OrderBy};
use payloads::{Appointment, ItineraryId, collections};
use serde_json::json;
use yew::prelude::*;

use super::{LiveQueryReturn, use_live_query};

/// Live list of appointments for one itinerary, soonest first.
#[hook]
pub fn use_appointments(
    itinerary_id: Option<ItineraryId>,
) -> LiveQueryReturn<Appointment> {
    let mut query = CollectionQuery::new(collections::APPOINTMENTS)
        .order_by(OrderBy::asc("startsAt"));
    if let Some(id) = itinerary_id {
        query = query.filter("itineraryId", json!(id));
    }
    use_live_query(query)
}
