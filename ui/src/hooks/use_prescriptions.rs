use livestore::{CollectionQuery, OrderBy};
use payloads::{AppointmentId, Prescription, collections};
use serde_json::json;
use yew::prelude::*;

use super::{LiveQueryReturn, use_live_query};

/// Live list of prescriptions for one appointment, newest first.
#[hook]
pub fn use_prescriptions(
    appointment_id: Option<AppointmentId>,
) -> LiveQueryReturn<Prescription> {
    let mut query = CollectionQuery::new(collections::PRESCRIPTIONS)
        .order_by(OrderBy::desc("created.on"));
    if let Some(id) = appointment_id {
        query = query.filter("appointmentId", json!(id));
    }
    use_live_query(query)
}
