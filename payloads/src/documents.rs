use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{AppointmentId, ItineraryId, NoteId, PrescriptionId};

/// Creation metadata carried by store documents.
///
/// Serialized as `{"on": "...", "by": "..."}`; list orderings key off the
/// dotted path `created.on`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStamp {
    pub on: Timestamp,
    /// Display name of the author, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

impl AuditStamp {
    pub fn now() -> Self {
        Self {
            on: Timestamp::now(),
            by: None,
        }
    }
}

/// A planned course of care: an ordered set of appointments for one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: ItineraryId,
    pub title: String,
    pub patient_name: String,
    pub created: AuditStamp,
}

/// A single visit within an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub itinerary_id: ItineraryId,
    pub title: String,
    pub clinic: String,
    pub starts_at: Timestamp,
    pub created: AuditStamp,
}

/// A note written by a doctor against one appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorNote {
    pub id: NoteId,
    pub appointment_id: AppointmentId,
    pub body: String,
    pub created: AuditStamp,
}

/// A prescription issued against one appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: PrescriptionId,
    pub appointment_id: AppointmentId,
    pub medication: String,
    pub dosage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub created: AuditStamp,
}
