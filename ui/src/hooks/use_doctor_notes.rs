use livestore::{CollectionQuery, OrderBy};
use payloads::{AppointmentId, DoctorNote, collections};
use serde_json::json;
use yew::prelude::*;

use super::{LiveQueryReturn, use_live_query};

/// Live list of doctor notes for one appointment, newest first.
///
/// While the appointment id is not yet known (the parent record is still
/// loading), the store is not contacted and the hook yields an empty,
/// non-loading list.
#[hook]
pub fn use_doctor_notes(
    appointment_id: Option<AppointmentId>,
) -> LiveQueryReturn<DoctorNote> {
    let mut query = CollectionQuery::new(collections::DOCTOR_NOTES)
        .order_by(OrderBy::desc("created.on"));
    if let Some(id) = appointment_id {
        query = query.filter("appointmentId", json!(id));
    }
    use_live_query(query)
}
